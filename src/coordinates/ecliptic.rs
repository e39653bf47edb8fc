use std::fmt;

use lazy_static::lazy_static;

use super::spherical::SphericalCoordinates;
use crate::constants::TAU;
use crate::math::{ClosedInterval, Interval, RightOpenInterval};
use crate::Result;

lazy_static! {
    static ref LON_RANGE: RightOpenInterval =
        RightOpenInterval::of(0.0, TAU).expect("[0, tau[ is a valid interval");
    static ref LAT_RANGE: ClosedInterval =
        ClosedInterval::symmetric(TAU / 2.0).expect("[-tau/4, tau/4] is a valid interval");
}

/// Ecliptic coordinates (longitude, latitude) in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoordinates(SphericalCoordinates);

impl EclipticCoordinates {
    /// Creates ecliptic coordinates, validating `lon ∈ [0, τ)` and
    /// `lat ∈ [-τ/4, τ/4]`
    pub fn of(lon: f64, lat: f64) -> Result<Self> {
        let lon = LON_RANGE.check(lon, "ecliptic longitude")?;
        let lat = LAT_RANGE.check(lat, "ecliptic latitude")?;
        Ok(Self(SphericalCoordinates::new(lon, lat)))
    }

    /// Ecliptic longitude in radians
    pub fn lon(&self) -> f64 {
        self.0.lon()
    }

    /// Ecliptic longitude in degrees
    pub fn lon_deg(&self) -> f64 {
        self.0.lon_deg()
    }

    /// Ecliptic latitude in radians
    pub fn lat(&self) -> f64 {
        self.0.lat()
    }

    /// Ecliptic latitude in degrees
    pub fn lat_deg(&self) -> f64 {
        self.0.lat_deg()
    }
}

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(λ={:.4}°, β={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_ecliptic_ranges() {
        let coord = EclipticCoordinates::of(PI, -PI / 4.0).unwrap();
        assert_eq!(coord.lon(), PI);
        assert_eq!(coord.lat(), -PI / 4.0);
        assert!(EclipticCoordinates::of(TAU, 0.0).is_err());
        assert!(EclipticCoordinates::of(0.0, -PI).is_err());
    }

    #[test]
    fn test_display() {
        let coord = EclipticCoordinates::of(PI / 2.0, 0.0).unwrap();
        assert_eq!(coord.to_string(), "(λ=90.0000°, β=0.0000°)");
    }
}
