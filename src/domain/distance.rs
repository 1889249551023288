//! Great-circle distances.

use super::entities::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers, unrounded.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance rounded to the nearest whole kilometer.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> u32 {
    // Bounded by half the circumference (~20 015 km).
    haversine_km(a, b).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint { lat, lng }
    }

    #[test]
    fn identical_points_are_zero() {
        let toronto = point(43.65, -79.38);
        assert_eq!(distance_km(toronto, toronto), 0);
        assert_eq!(haversine_km(toronto, toronto), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let vancouver = point(49.28, -123.12);
        let halifax = point(44.65, -63.57);
        assert_eq!(distance_km(vancouver, halifax), distance_km(halifax, vancouver));
    }

    #[test]
    fn toronto_to_montreal() {
        let toronto = point(43.65, -79.38);
        let montreal = point(45.50, -73.57);
        assert_eq!(distance_km(toronto, montreal), 504);
        assert!((haversine_km(toronto, montreal) - 503.92).abs() < 0.01);
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let a = point(0.0, 0.0);
        let b = point(0.0, 180.0);
        let expected = (std::f64::consts::PI * EARTH_RADIUS_KM).round() as u32;
        assert_eq!(distance_km(a, b), expected);
        assert_eq!(expected, 20015);
    }
}
