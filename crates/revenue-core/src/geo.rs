//! Great-circle distances over recorded mileage coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.75;

pub const MILES_TO_KILOMETERS: f64 = 1.609;

/// A recorded position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Recording time in milliseconds since the Unix epoch
    #[serde(default)]
    pub date: i64,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            date: 0,
            latitude,
            longitude,
        }
    }

    pub fn with_date(mut self, date: i64) -> Self {
        self.date = date;
        self
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Latitude: {} longitude: {}", self.latitude, self.longitude)
    }
}

/// Haversine distance in miles.
pub fn distance_miles(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

pub fn distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    distance_miles(from, to) * MILES_TO_KILOMETERS
}

/// Total length of a route through `points` in order, in miles.
pub fn route_distance_miles(points: &[Coordinate]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance_miles(&pair[0], &pair[1]))
        .sum()
}

pub fn route_distance_km(points: &[Coordinate]) -> f64 {
    route_distance_miles(points) * MILES_TO_KILOMETERS
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMSTERDAM: Coordinate = Coordinate {
        date: 0,
        latitude: 52.3676,
        longitude: 4.9041,
    };
    const UTRECHT: Coordinate = Coordinate {
        date: 0,
        latitude: 52.0907,
        longitude: 5.1214,
    };
    const ROTTERDAM: Coordinate = Coordinate {
        date: 0,
        latitude: 51.9244,
        longitude: 4.4777,
    };

    #[test]
    fn test_amsterdam_to_rotterdam() {
        let km = distance_km(&AMSTERDAM, &ROTTERDAM);
        assert!((km - 57.2).abs() < 0.5, "got {}", km);
        let miles = distance_miles(&AMSTERDAM, &ROTTERDAM);
        assert!((miles - 35.56).abs() < 0.1, "got {}", miles);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_miles(&UTRECHT, &UTRECHT), 0.0);
    }

    #[test]
    fn test_route_sums_legs() {
        let route = [AMSTERDAM, UTRECHT, ROTTERDAM];
        let expected = distance_km(&AMSTERDAM, &UTRECHT) + distance_km(&UTRECHT, &ROTTERDAM);
        assert!((route_distance_km(&route) - expected).abs() < 1e-9);
        assert!(route_distance_km(&route) > distance_km(&AMSTERDAM, &ROTTERDAM));
    }

    #[test]
    fn test_short_routes_are_zero() {
        assert_eq!(route_distance_miles(&[]), 0.0);
        assert_eq!(route_distance_miles(&[AMSTERDAM]), 0.0);
    }

    #[test]
    fn test_serde_field_names() {
        let encoded = toml::to_string(&AMSTERDAM.with_date(1_700_000_000_000)).unwrap();
        assert!(encoded.contains("lat = 52.3676"));
        assert!(encoded.contains("lng = 4.9041"));
        assert!(encoded.contains("date = 1700000000000"));

        let decoded: Coordinate = toml::from_str("lat = 51.9244\nlng = 4.4777\n").unwrap();
        assert_eq!(decoded, ROTTERDAM);
    }
}
