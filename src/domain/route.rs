//! Multi-stop route ordering and leg-by-leg pricing.

use serde::{Deserialize, Serialize};

use super::distance::distance_km;
use super::entities::{Location, Positioned};
use super::shipping::{validate_weight, EstimateError, ShippingTier};

/// Visiting order (start first) and the sum of the rounded leg distances.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute<T> {
    pub sequence: Vec<T>,
    pub total_distance_km: u32,
}

/// Greedy nearest-neighbor ordering.
///
/// From the current position, the closest remaining stop is visited next.
/// Ties go to whichever remaining stop comes first in `stops`. Quadratic in the
/// number of stops and not optimal; stop lists are typed in by hand.
pub fn optimize_route<T>(start: &T, stops: &[T]) -> OptimizedRoute<T>
where
    T: Positioned + Clone,
{
    let mut sequence = Vec::with_capacity(stops.len() + 1);
    sequence.push(start.clone());

    let mut remaining: Vec<&T> = stops.iter().collect();
    let mut current = start.position();
    let mut total_distance_km = 0;

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_distance = u32::MAX;
        for (idx, stop) in remaining.iter().enumerate() {
            let distance = distance_km(current, stop.position());
            if distance < best_distance {
                best_idx = idx;
                best_distance = distance;
            }
        }

        let next = remaining.remove(best_idx);
        total_distance_km += best_distance;
        current = next.position();
        sequence.push(next.clone());
    }

    OptimizedRoute {
        sequence,
        total_distance_km,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from: Location,
    pub to: Location,
    pub distance_km: u32,
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub route: OptimizedRoute<Location>,
    pub legs: Vec<RouteLeg>,
    pub total_cost: f64,
    /// Largest per-leg delivery upper bound.
    pub delivery_days_max: u32,
}

/// Orders the stops and prices every leg at the standard tier.
pub fn plan_route(
    start: &Location,
    stops: &[Location],
    weight: f64,
) -> Result<RoutePlan, EstimateError> {
    let weight = validate_weight(weight)?;
    if stops.is_empty() {
        return Err(EstimateError::EmptyRoute);
    }

    let route = optimize_route(start, stops);
    let rates = ShippingTier::Standard.rates();

    let legs: Vec<RouteLeg> = route
        .sequence
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let distance_km = distance_km(from.point, to.point);
            RouteLeg {
                from: from.clone(),
                to: to.clone(),
                distance_km,
                cost: rates.price(distance_km, weight),
            }
        })
        .collect();

    let total_cost = legs.iter().map(|leg| leg.cost).sum();
    // Every leg ships at the same tier, so the slowest leg is that tier's bound.
    let delivery_days_max = rates.delivery_days.max;

    Ok(RoutePlan {
        route,
        legs,
        total_cost,
        delivery_days_max,
    })
}
