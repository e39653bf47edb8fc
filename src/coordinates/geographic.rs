use std::fmt;

use lazy_static::lazy_static;

use super::spherical::SphericalCoordinates;
use crate::math::{angle, ClosedInterval, Interval, RightOpenInterval};
use crate::{check_argument, Result};

lazy_static! {
    static ref LON_DEG_RANGE: RightOpenInterval =
        RightOpenInterval::symmetric(360.0).expect("[-180, 180[ is a valid interval");
    static ref LAT_DEG_RANGE: ClosedInterval =
        ClosedInterval::symmetric(180.0).expect("[-90, 90] is a valid interval");
}

/// Geographic coordinates of an observer on Earth
///
/// Validity is checked on the degree values, `lon ∈ [-180°, 180°)` and
/// `lat ∈ [-90°, 90°]`; accessors return radians unless suffixed `_deg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicCoordinates(SphericalCoordinates);

impl GeographicCoordinates {
    /// Creates geographic coordinates from degrees
    pub fn of_deg(lon_deg: f64, lat_deg: f64) -> Result<Self> {
        check_argument(Self::is_valid_lon_deg(lon_deg), || {
            format!("longitude = {}° is outside {}", lon_deg, *LON_DEG_RANGE)
        })?;
        check_argument(Self::is_valid_lat_deg(lat_deg), || {
            format!("latitude = {}° is outside {}", lat_deg, *LAT_DEG_RANGE)
        })?;
        Ok(Self(SphericalCoordinates::new(
            angle::of_deg(lon_deg),
            angle::of_deg(lat_deg),
        )))
    }

    /// Whether `lon_deg` is a valid longitude in degrees
    pub fn is_valid_lon_deg(lon_deg: f64) -> bool {
        LON_DEG_RANGE.contains(lon_deg)
    }

    /// Whether `lat_deg` is a valid latitude in degrees
    pub fn is_valid_lat_deg(lat_deg: f64) -> bool {
        LAT_DEG_RANGE.contains(lat_deg)
    }

    /// Longitude in radians, positive eastwards
    pub fn lon(&self) -> f64 {
        self.0.lon()
    }

    /// Longitude in degrees
    pub fn lon_deg(&self) -> f64 {
        self.0.lon_deg()
    }

    /// Latitude in radians
    pub fn lat(&self) -> f64 {
        self.0.lat()
    }

    /// Latitude in degrees
    pub fn lat_deg(&self) -> f64 {
        self.0.lat_deg()
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon={:.4}°, lat={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geographic_validation() {
        assert!(GeographicCoordinates::is_valid_lon_deg(-180.0));
        assert!(!GeographicCoordinates::is_valid_lon_deg(180.0));
        assert!(GeographicCoordinates::is_valid_lat_deg(90.0));
        assert!(!GeographicCoordinates::is_valid_lat_deg(90.01));

        assert!(GeographicCoordinates::of_deg(180.0, 0.0).is_err());
        assert!(GeographicCoordinates::of_deg(0.0, -91.0).is_err());
    }

    #[test]
    fn test_geographic_radians() {
        let lausanne = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        assert_relative_eq!(lausanne.lon_deg(), 6.57, epsilon = 1e-12);
        assert_relative_eq!(lausanne.lat(), 46.52_f64.to_radians(), epsilon = 1e-15);
        assert_eq!(lausanne.to_string(), "(lon=6.5700°, lat=46.5200°)");
    }
}
