use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        (lat_ok && lng_ok).then_some(Self { lat, lng })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// A geocoded place. Identity is the provider's place id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub point: GeoPoint,
    /// Short label, e.g. "Toronto, Ontario"
    pub display_name: String,
    /// Full provider string
    pub full_address: String,
    pub postal_code: Option<String>,
}

impl Location {
    pub fn same_place(&self, other: &Location) -> bool {
        self.id == other.id
    }
}

/// Anything that sits at a fixed coordinate.
pub trait Positioned {
    fn position(&self) -> GeoPoint;
}

impl Positioned for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}

impl Positioned for Location {
    fn position(&self) -> GeoPoint {
        self.point
    }
}

/// Input fields that drive geocoding lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Origin,
    Destination,
    Start,
    Stop,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Origin, Field::Destination, Field::Start, Field::Stop];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Origin => "Origin",
            Field::Destination => "Destination",
            Field::Start => "Start location",
            Field::Stop => "Stop",
        }
    }

    /// Stop entries are queued rather than held as a single selection.
    pub fn is_stop_entry(&self) -> bool {
        matches!(self, Field::Stop)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
