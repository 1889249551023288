//! Rate table and single-leg shipping estimates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::distance::distance_km;
use super::entities::{Field, Location};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("weight must be a positive number of kilograms")]
    NonPositiveWeight,
    #[error("unknown shipping tier: {0}")]
    UnknownTier(String),
    #[error("origin and destination must be different places")]
    SameLocation,
    #[error("add at least one stop to plan a route")]
    EmptyRoute,
    #[error("select a {0} from the suggestions")]
    MissingSelection(Field),
}

/// Inclusive range of business days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for DeliveryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{} day{}", self.min, if self.min == 1 { "" } else { "s" })
        } else {
            write!(f, "{}-{} days", self.min, self.max)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub base_cost: f64,
    pub per_km: f64,
    pub per_weight: f64,
    pub delivery_days: DeliveryWindow,
}

impl RateCard {
    /// `base + distance * per_km + weight * per_weight`.
    pub fn price(&self, distance_km: u32, weight: f64) -> f64 {
        self.base_cost + distance_km as f64 * self.per_km + weight * self.per_weight
    }
}

const STANDARD_RATES: RateCard = RateCard {
    base_cost: 18.0,
    per_km: 0.65,
    per_weight: 0.15,
    delivery_days: DeliveryWindow { min: 3, max: 5 },
};

const EXPRESS_RATES: RateCard = RateCard {
    base_cost: 30.0,
    per_km: 0.95,
    per_weight: 0.25,
    delivery_days: DeliveryWindow { min: 1, max: 3 },
};

const OVERNIGHT_RATES: RateCard = RateCard {
    base_cost: 55.0,
    per_km: 1.40,
    per_weight: 0.40,
    delivery_days: DeliveryWindow { min: 1, max: 1 },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingTier {
    #[default]
    Standard,
    Express,
    Overnight,
}

impl ShippingTier {
    pub const ALL: [ShippingTier; 3] = [
        ShippingTier::Standard,
        ShippingTier::Express,
        ShippingTier::Overnight,
    ];

    pub fn rates(&self) -> &'static RateCard {
        match self {
            ShippingTier::Standard => &STANDARD_RATES,
            ShippingTier::Express => &EXPRESS_RATES,
            ShippingTier::Overnight => &OVERNIGHT_RATES,
        }
    }

    /// Form value, also accepted by `FromStr`.
    pub fn key(&self) -> &'static str {
        match self {
            ShippingTier::Standard => "standard",
            ShippingTier::Express => "express",
            ShippingTier::Overnight => "overnight",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShippingTier::Standard => "Standard",
            ShippingTier::Express => "Express",
            ShippingTier::Overnight => "Overnight",
        }
    }
}

impl FromStr for ShippingTier {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EstimateError::UnknownTier(wanted.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShippingEstimate {
    pub tier: ShippingTier,
    pub cost: f64,
    pub distance_km: u32,
    pub delivery_days: DeliveryWindow,
}

pub fn validate_weight(weight: f64) -> Result<f64, EstimateError> {
    if weight.is_finite() && weight > 0.0 {
        Ok(weight)
    } else {
        Err(EstimateError::NonPositiveWeight)
    }
}

/// Parses a weight typed into a form field.
pub fn parse_weight(raw: &str) -> Result<f64, EstimateError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| EstimateError::NonPositiveWeight)
        .and_then(validate_weight)
}

/// Prices a single origin → destination shipment.
pub fn estimate_shipment(
    origin: &Location,
    destination: &Location,
    weight: f64,
    tier: ShippingTier,
) -> Result<ShippingEstimate, EstimateError> {
    let weight = validate_weight(weight)?;
    if origin.same_place(destination) {
        return Err(EstimateError::SameLocation);
    }

    let distance_km = distance_km(origin.point, destination.point);
    let rates = tier.rates();

    Ok(ShippingEstimate {
        tier,
        cost: rates.price(distance_km, weight),
        distance_km,
        delivery_days: rates.delivery_days,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::entities::GeoPoint;

    fn place(id: &str, lat: f64, lng: f64) -> Location {
        Location {
            id: id.to_string(),
            point: GeoPoint { lat, lng },
            display_name: id.to_string(),
            full_address: id.to_string(),
            postal_code: None,
        }
    }

    #[test]
    fn toronto_to_montreal_standard() {
        let toronto = place("toronto", 43.65, -79.38);
        let montreal = place("montreal", 45.50, -73.57);

        let estimate = estimate_shipment(&toronto, &montreal, 10.0, ShippingTier::Standard)
            .expect("valid estimate");

        assert_eq!(estimate.distance_km, 504);
        assert!((estimate.cost - 347.1).abs() < 1e-9);
        assert_eq!(estimate.delivery_days, DeliveryWindow { min: 3, max: 5 });
    }

    #[rstest]
    #[case(ShippingTier::Standard)]
    #[case(ShippingTier::Express)]
    #[case(ShippingTier::Overnight)]
    fn cost_follows_rate_formula(#[case] tier: ShippingTier) {
        let calgary = place("calgary", 51.05, -114.07);
        let regina = place("regina", 50.45, -104.61);
        let weight = 7.5;

        let estimate = estimate_shipment(&calgary, &regina, weight, tier).expect("valid estimate");
        let rates = tier.rates();
        let expected = rates.base_cost
            + distance_km(calgary.point, regina.point) as f64 * rates.per_km
            + weight * rates.per_weight;

        assert_eq!(estimate.cost, expected);
        assert_eq!(estimate.delivery_days, rates.delivery_days);
    }

    #[test]
    fn delivery_window_ignores_distance() {
        let a = place("a", 43.65, -79.38);
        let near = place("near", 43.70, -79.40);
        let far = place("far", 49.28, -123.12);

        let short = estimate_shipment(&a, &near, 1.0, ShippingTier::Express).expect("valid");
        let long = estimate_shipment(&a, &far, 1.0, ShippingTier::Express).expect("valid");
        assert_eq!(short.delivery_days, long.delivery_days);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_bad_weights(#[case] weight: f64) {
        let a = place("a", 43.65, -79.38);
        let b = place("b", 45.50, -73.57);
        assert_eq!(
            estimate_shipment(&a, &b, weight, ShippingTier::Standard),
            Err(EstimateError::NonPositiveWeight)
        );
    }

    #[test]
    fn rejects_same_place_by_id() {
        let a = place("same", 43.65, -79.38);
        let mut b = place("same", 45.50, -73.57);
        b.display_name = "elsewhere".to_string();
        assert_eq!(
            estimate_shipment(&a, &b, 1.0, ShippingTier::Standard),
            Err(EstimateError::SameLocation)
        );
    }

    #[test]
    fn parses_tier_keys() {
        assert_eq!("standard".parse::<ShippingTier>(), Ok(ShippingTier::Standard));
        assert_eq!(" Express ".parse::<ShippingTier>(), Ok(ShippingTier::Express));
        assert_eq!("OVERNIGHT".parse::<ShippingTier>(), Ok(ShippingTier::Overnight));
        assert_eq!(
            "freight".parse::<ShippingTier>(),
            Err(EstimateError::UnknownTier("freight".to_string()))
        );
    }

    #[test]
    fn parses_weight_input() {
        assert_eq!(parse_weight(" 12.5 "), Ok(12.5));
        assert_eq!(parse_weight("heavy"), Err(EstimateError::NonPositiveWeight));
        assert_eq!(parse_weight("0"), Err(EstimateError::NonPositiveWeight));
    }

    #[test]
    fn delivery_window_display() {
        assert_eq!(DeliveryWindow { min: 3, max: 5 }.to_string(), "3-5 days");
        assert_eq!(DeliveryWindow { min: 1, max: 1 }.to_string(), "1 day");
    }
}
