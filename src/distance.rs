//! Great-circle distance on a spherical Earth.

use crate::models::GeoPoint;

/// Earth radius used by the haversine formula, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two lat/lon pairs given in degrees.
///
/// Coordinates are not range-checked. Out-of-range values still go through
/// the formula and produce a finite but non-physical result. No rounding
/// happens here.
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Keeps asin/sqrt defined for antipodal points and out-of-range input
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    c * EARTH_RADIUS_KM
}

/// `great_circle_km` for two points.
pub fn distance_between(a: GeoPoint, b: GeoPoint) -> f64 {
    great_circle_km(a.lat, a.lon, b.lat, b.lon)
}

/// Round a distance to 3 decimal places (meter precision).
pub fn round_km(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_distance_is_zero() {
        for (lat, lon) in [(10.0, 76.0), (0.0, 0.0), (-33.86, 151.21), (90.0, 0.0)] {
            assert_eq!(great_circle_km(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ((9.9312, 76.2673), (10.0159, 76.3419)),
            ((51.5074, -0.1278), (40.7128, -74.0060)),
            ((-33.86, 151.21), (35.68, 139.69)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let ab = great_circle_km(lat1, lon1, lat2, lon2);
            let ba = great_circle_km(lat2, lon2, lat1, lon1);
            assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
            assert!(ab >= 0.0);
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // pi * R / 180
        let d = great_circle_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19492664455873).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points() {
        let d = great_circle_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_input_is_finite() {
        let d = great_circle_km(120.0, 400.0, -95.0, -200.0);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_known_city_pairs() {
        let kochi_aluva = great_circle_km(9.9312, 76.2673, 10.1004, 76.3519);
        assert!((kochi_aluva - 20.97116981641461).abs() < 1e-9);

        let london_new_york = great_circle_km(51.5074, -0.1278, 40.7128, -74.0060);
        assert!((london_new_york - 5570.222179737958).abs() < 1e-6);
    }

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(1.23456), 1.235);
        assert_eq!(round_km(4.8), 4.8);
        assert_eq!(round_km(0.0), 0.0);
    }

    #[test]
    fn test_distance_between_points() {
        let a = GeoPoint::new(9.9312, 76.2673);
        let b = GeoPoint::new(10.1004, 76.3519);
        assert_eq!(distance_between(a, b), great_circle_km(9.9312, 76.2673, 10.1004, 76.3519));
    }
}
