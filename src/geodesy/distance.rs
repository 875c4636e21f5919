//! Great-circle distance on the mean-radius sphere

use crate::core::constants::EARTH_RADIUS_M;
use crate::core::types::Coordinate;

/// Haversine distance between two coordinates (meters)
///
/// The half-chord term is clamped to [0, 1] before the `asin`: at antipodal
/// points floating-point rounding can push it marginally above 1, which would
/// otherwise produce NaN.
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().clamp(0.0, 1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Within 1% relative tolerance, or 1 m absolute for short hops
    fn assert_close(actual: f64, expected: f64) {
        let tol = (expected * 0.01).max(1.0);
        assert!(
            (actual - expected).abs() < tol,
            "expected {} m, got {} m",
            expected,
            actual
        );
    }

    #[test]
    fn test_identical_points_are_zero() {
        for c in [coord(0.0, 0.0), coord(49.26, -123.14), coord(-90.0, 0.0)] {
            assert_eq!(distance_meters(&c, &c), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let a = coord(49.26, -123.14);
        let b = coord(48.62, -122.18);
        assert_eq!(distance_meters(&a, &b), distance_meters(&b, &a));
    }

    #[test]
    fn test_reference_distances() {
        let cases = [
            (0.0, 0.0, 0.0, 1.0, 111_194.0),
            (0.0, 0.0, 1.0, 1.0, 157_249.0),
            (49.26, -123.14, 49.25, -123.13, 1_328.0),
            (49.26, -123.14, 48.62, -122.18, 99_902.0),
            (49.26, -123.14, 42.55, -114.51, 1_000_000.0),
        ];
        for (lat1, lng1, lat2, lng2, expected) in cases {
            let d = distance_meters(&coord(lat1, lng1), &coord(lat2, lng2));
            assert_close(d, expected);
        }
    }

    #[test]
    fn test_antipodal_does_not_produce_nan() {
        let d = distance_meters(&coord(0.0, 0.0), &coord(0.0, 180.0));
        assert!(d.is_finite());
        assert_close(d, 20_015_086.0);

        let d = distance_meters(&coord(90.0, 0.0), &coord(-90.0, 0.0));
        assert!(d.is_finite());
        assert_close(d, 20_015_086.0);
    }
}
