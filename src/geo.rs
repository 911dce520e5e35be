//! Great-circle navigation on a spherical earth.
//!
//! All angles going in and out of this module are decimal degrees and all
//! distances are kilometres. Nothing here validates its input: degenerate
//! values come back as NaN rather than as an error.

use itertools::Itertools;

use crate::error::Result;
use crate::units::{self, Axis};

/// Equatorial radius used for every projection, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    /// Ex: 037:01:23.80 N 113:29:07.50 W
    pub fn from_openair(text: &str) -> Result<Self> {
        let (lat, lon) = units::split_openair_pair(text)?;
        Ok(LatLon(
            units::openair_to_decimal(lat)?,
            units::openair_to_decimal(lon)?,
        ))
    }

    /// Both axes in the OpenAIR wire form, space separated.
    pub fn to_openair(self) -> String {
        [
            units::decimal_to_openair(self.0, Axis::Latitude),
            units::decimal_to_openair(self.1, Axis::Longitude),
        ]
        .iter()
        .join(" ")
    }
}

/// Projects `origin` along `bearing` (degrees true) for `distance` km.
pub fn destination_point(origin: LatLon, bearing: f64, distance: f64) -> LatLon {
    destination_point_on(EARTH_RADIUS_KM, origin, bearing, distance)
}

/// Same as [`destination_point`] on a sphere of the given radius.
pub fn destination_point_on(radius: f64, origin: LatLon, bearing: f64, distance: f64) -> LatLon {
    let bearing = bearing.to_radians();
    let lat = origin.lat().to_radians();
    let lon = origin.lon().to_radians();
    let angular = distance / radius;

    let final_lat =
        (lat.sin() * angular.cos() + lat.cos() * angular.sin() * bearing.cos()).asin();
    let final_lon = lon
        + (bearing.sin() * angular.sin() * lat.cos())
            .atan2(angular.cos() - lat.sin() * final_lat.sin());

    LatLon(final_lat.to_degrees(), final_lon.to_degrees())
}

/// Initial bearing from `a` to `b`, normalised into [0, 360).
pub fn bearing_between(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    units::normalize_bearing(y.atan2(x).to_degrees())
}

pub fn midpoint(a: LatLon, b: LatLon) -> LatLon {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    let lat3 = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lon3 = a.lon().to_radians() + by.atan2(lat1.cos() + bx);

    LatLon(lat3.to_degrees(), lon3.to_degrees())
}

/// Haversine distance between two points, in kilometres.
pub fn distance_between(a: LatLon, b: LatLon) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

// The two intersection helpers treat a-b as a straight line in plain
// lat/lon space. Good enough for segments a few miles long.

fn line_through(a: LatLon, b: LatLon) -> (f64, f64) {
    let m = (b.lat() - a.lat()) / (b.lon() - a.lon());
    (m, a.lat() - m * a.lon())
}

/// Point where segment a-b crosses `latitude`, if it does.
pub fn intersection_at_latitude(a: LatLon, b: LatLon, latitude: f64) -> Option<LatLon> {
    let (m, c) = line_through(a, b);
    let x = (latitude - c) / m;

    if !x.is_finite() || x < a.lon().min(b.lon()) || x > a.lon().max(b.lon()) {
        return None;
    }

    Some(LatLon(latitude, x))
}

/// Point where segment a-b crosses `longitude`, if it does.
///
/// A vertical segment (`a.lon() == b.lon()`) has no usable slope and always
/// yields `None`.
pub fn intersection_at_longitude(a: LatLon, b: LatLon, longitude: f64) -> Option<LatLon> {
    let (m, c) = line_through(a, b);
    let y = m * longitude + c;

    if !y.is_finite() || y < a.lat().min(b.lat()) || y > a.lat().max(b.lat()) {
        return None;
    }

    Some(LatLon(y, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KSGU: LatLon = LatLon(37.036389, -113.510278);

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    fn angle_close(a: f64, b: f64, tolerance: f64) -> bool {
        let diff = (a - b).rem_euclid(360.0);
        diff < tolerance || 360.0 - diff < tolerance
    }

    #[test]
    fn zero_distance_returns_origin() {
        for &bearing in &[0.0, 45.0, 90.0, 181.5, 359.0] {
            let p = destination_point(KSGU, bearing, 0.0);
            assert!(close(p.lat(), KSGU.lat(), 1e-9), "lat drifted at {}", bearing);
            assert!(close(p.lon(), KSGU.lon(), 1e-9), "lon drifted at {}", bearing);
        }
    }

    #[test]
    fn due_north_moves_latitude_only() {
        let p = destination_point(KSGU, 0.0, 10.0);
        assert!(p.lat() > KSGU.lat());
        assert!(close(p.lon(), KSGU.lon(), 1e-9));

        // One degree of arc on this sphere
        let degree = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        let p = destination_point(LatLon::new(0.0, 0.0), 0.0, degree);
        assert!(close(p.lat(), 1.0, 1e-9));
    }

    #[test]
    fn bearing_recovers_projection_heading() {
        for &bearing in &[0.0, 24.0, 90.0, 135.0, 204.0, 270.0, 350.0] {
            let p = destination_point(KSGU, bearing, 5.0);
            let back = bearing_between(KSGU, p);
            assert!(angle_close(back, bearing, 1e-6), "{} vs {}", back, bearing);
        }
    }

    #[test]
    fn bearing_is_normalized() {
        let west = LatLon::new(KSGU.lat(), KSGU.lon() - 0.1);
        let b = bearing_between(KSGU, west);
        assert!((0.0..360.0).contains(&b));
        assert!(close(b, 270.0, 0.1));
    }

    #[test]
    fn midpoint_is_symmetric() {
        let pairs = [
            (KSGU, LatLon::new(37.1, -113.4)),
            (LatLon::new(-33.9, 151.2), LatLon::new(-34.1, 150.8)),
            (LatLon::new(0.0, 0.0), LatLon::new(10.0, 10.0)),
        ];
        for &(a, b) in &pairs {
            let ab = midpoint(a, b);
            let ba = midpoint(b, a);
            assert!(close(ab.lat(), ba.lat(), 1e-9));
            assert!(close(ab.lon(), ba.lon(), 1e-9));
        }
    }

    #[test]
    fn midpoint_on_meridian() {
        let m = midpoint(LatLon::new(10.0, 5.0), LatLon::new(20.0, 5.0));
        assert!(close(m.lat(), 15.0, 1e-9));
        assert!(close(m.lon(), 5.0, 1e-9));
    }

    #[test]
    fn haversine_matches_projection() {
        let p = destination_point(KSGU, 24.0, 6.019);
        assert!(close(distance_between(KSGU, p), 6.019, 1e-6));
    }

    #[test]
    fn intersection_inside_segment() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(2.0, 4.0);

        let p = intersection_at_longitude(a, b, 1.0).unwrap();
        assert!(close(p.lat(), 0.5, 1e-12));
        assert_eq!(p.lon(), 1.0);

        let p = intersection_at_latitude(a, b, 1.0).unwrap();
        assert_eq!(p.lat(), 1.0);
        assert!(close(p.lon(), 2.0, 1e-12));
    }

    #[test]
    fn intersection_outside_segment() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(2.0, 4.0);
        assert_eq!(intersection_at_longitude(a, b, 5.0), None);
        assert_eq!(intersection_at_latitude(a, b, -1.0), None);
    }

    #[test]
    fn vertical_segment_has_no_intersection() {
        let a = LatLon::new(37.0, -113.5);
        let b = LatLon::new(37.1, -113.5);
        assert_eq!(intersection_at_longitude(a, b, -113.5), None);
        assert_eq!(intersection_at_longitude(a, b, -113.4), None);
        assert_eq!(intersection_at_longitude(a, b, 10.0), None);
    }

    #[test]
    fn horizontal_segment_has_no_latitude_crossing() {
        let a = LatLon::new(37.0, -113.5);
        let b = LatLon::new(37.0, -113.4);
        assert_eq!(intersection_at_latitude(a, b, 37.0), None);
    }

    #[test]
    fn openair_pair_round_trip() {
        let p = LatLon::from_openair("037:01:23.80 N 113:29:07.50 W").unwrap();
        assert_eq!(p, LatLon::new(37.023278, -113.485417));
        assert_eq!(p.to_openair(), "037:01:23.80 N 113:29:07.50 W");
    }
}
