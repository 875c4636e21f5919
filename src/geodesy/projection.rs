//! Direct geodetic problem: project a coordinate along a bearing

use crate::core::constants::{EARTH_RADIUS_KM, FLOAT_EPS};
use crate::core::types::Coordinate;
use std::f64::consts::PI;

/// Coordinates reached when moving `distance_km` from `origin` along compass
/// bearing `bearing_deg` (clockwise from true north), on a great circle.
///
/// Distance is in kilometers; callers holding meters pass `meters / 1000.0`.
/// When the endpoint lands on a pole (`cos(lat2)` within epsilon of zero) the
/// longitude is held at the origin's value instead of dividing by near-zero.
pub fn destination(bearing_deg: f64, distance_km: f64, origin: &Coordinate) -> Coordinate {
    let rlat = origin.latitude.to_radians();
    let rlng = origin.longitude.to_radians();
    let rbearing = bearing_deg.to_radians();
    // Normalize linear distance to a radian angle
    let rdist = distance_km / EARTH_RADIUS_KM;

    let rlat2 = (rlat.sin() * rdist.cos() + rlat.cos() * rdist.sin() * rbearing.cos()).asin();

    let rlat2_cos = rlat2.cos();
    let rlng2 = if rlat2_cos.abs() < FLOAT_EPS {
        // Endpoint is a pole
        rlng
    } else {
        let lng_offset = ((rbearing.sin() * rdist.sin()) / rlat2_cos).asin();
        (rlng - lng_offset + PI).rem_euclid(2.0 * PI) - PI
    };

    Coordinate {
        latitude: rlat2.to_degrees(),
        longitude: rlng2.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::distance_meters;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_reference_projections() {
        // (bearing, distance km, origin lat, origin lng, dest lat, dest lng)
        let cases = [
            (0.0, 1.0, 0.0, 0.0, 0.01, 0.0),
            (90.0, 1.0, 0.0, 0.0, 0.0, -0.01),
            (0.0, 100.0, 0.0, 0.0, 0.9, 0.0),
            (90.0, 100.0, 0.0, 0.0, 0.0, -0.9),
            (225.0, 1.0, 49.26, -123.14, 49.25, -123.13),
            (225.0, 100.0, 49.26, -123.14, 48.62, -122.18),
            (225.0, 1000.0, 49.26, -123.14, 42.55, -114.51),
        ];
        for (bearing, dist, lat1, lng1, lat2, lng2) in cases {
            let dest = destination(bearing, dist, &coord(lat1, lng1));
            assert!(
                (dest.latitude - lat2).abs() < 0.005,
                "bearing {} dist {}: lat {} vs {}",
                bearing,
                dist,
                dest.latitude,
                lat2
            );
            assert!(
                (dest.longitude - lng2).abs() < 0.005,
                "bearing {} dist {}: lng {} vs {}",
                bearing,
                dist,
                dest.longitude,
                lng2
            );
        }
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let origin = coord(49.26, -123.14);
        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
            let dest = destination(bearing, 0.0, &origin);
            assert!((dest.latitude - origin.latitude).abs() < 1e-9);
            assert!((dest.longitude - origin.longitude).abs() < 1e-9);
        }
    }

    #[test]
    fn test_round_trip_distance() {
        let origin = coord(49.26, -123.14);
        for bearing in [0.0, 90.0, 180.0, 270.0] {
            for dist_km in [0.001, 1.0, 100.0] {
                let dest = destination(bearing, dist_km, &origin);
                let d = distance_meters(&origin, &dest);
                let expected = dist_km * 1000.0;
                assert!(
                    (d - expected).abs() < (expected * 0.001).max(0.01),
                    "bearing {} dist {} km: round trip gave {} m",
                    bearing,
                    dist_km,
                    d
                );
            }
        }
    }

    #[test]
    fn test_pole_endpoint_holds_longitude() {
        // 11.12 m short of the north pole, heading straight at it
        let origin = coord(89.9999, 42.0);
        let dest = destination(0.0, 0.01112, &origin);

        assert!(dest.latitude > 89.9999 && dest.latitude <= 90.0);
        // Longitude is held at the origin meridian instead of computed
        assert!((dest.longitude - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_stays_normalized() {
        let origin = coord(0.0, -179.9);
        let dest = destination(90.0, 100.0, &origin);
        assert!((-180.0..=180.0).contains(&dest.longitude));
    }
}
