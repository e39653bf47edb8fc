use std::fmt;

use lazy_static::lazy_static;

use super::spherical::SphericalCoordinates;
use crate::constants::TAU;
use crate::math::{angle, ClosedInterval, Interval, RightOpenInterval};
use crate::Result;

lazy_static! {
    static ref RA_RANGE: RightOpenInterval =
        RightOpenInterval::of(0.0, TAU).expect("[0, tau[ is a valid interval");
    static ref DEC_RANGE: ClosedInterval =
        ClosedInterval::symmetric(TAU / 2.0).expect("[-tau/4, tau/4] is a valid interval");
}

/// Equatorial coordinates (right ascension, declination) in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates(SphericalCoordinates);

impl EquatorialCoordinates {
    /// Creates equatorial coordinates, validating `ra ∈ [0, τ)` and
    /// `dec ∈ [-τ/4, τ/4]`
    pub fn of(ra: f64, dec: f64) -> Result<Self> {
        let ra = RA_RANGE.check(ra, "right ascension")?;
        let dec = DEC_RANGE.check(dec, "declination")?;
        Ok(Self(SphericalCoordinates::new(ra, dec)))
    }

    /// Creates equatorial coordinates from degrees
    pub fn of_deg(ra_deg: f64, dec_deg: f64) -> Result<Self> {
        Self::of(angle::of_deg(ra_deg), angle::of_deg(dec_deg))
    }

    /// Builds coordinates the caller has already reduced to the valid ranges
    pub(crate) fn from_normalized(ra: f64, dec: f64) -> Self {
        debug_assert!(RA_RANGE.contains(ra) && DEC_RANGE.contains(dec));
        Self(SphericalCoordinates::new(ra, dec))
    }

    /// Right ascension in radians
    pub fn ra(&self) -> f64 {
        self.0.lon()
    }

    /// Right ascension in degrees
    pub fn ra_deg(&self) -> f64 {
        self.0.lon_deg()
    }

    /// Right ascension in hours
    pub fn ra_hr(&self) -> f64 {
        angle::to_hr(self.0.lon())
    }

    /// Declination in radians
    pub fn dec(&self) -> f64 {
        self.0.lat()
    }

    /// Declination in degrees
    pub fn dec_deg(&self) -> f64 {
        self.0.lat_deg()
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra={:.4}h, dec={:.4}°)", self.ra_hr(), self.dec_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_equatorial_accessors() {
        let coord = EquatorialCoordinates::of(PI / 2.0, PI / 6.0).unwrap();
        assert_eq!(coord.ra(), PI / 2.0);
        assert_eq!(coord.dec(), PI / 6.0);
        assert_relative_eq!(coord.ra_hr(), 6.0);
        assert_relative_eq!(coord.ra_deg(), 90.0);
        assert_relative_eq!(coord.dec_deg(), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equatorial_ranges() {
        assert!(EquatorialCoordinates::of(0.0, PI / 2.0).is_ok());
        assert!(EquatorialCoordinates::of(0.0, -PI / 2.0).is_ok());
        assert!(EquatorialCoordinates::of(TAU, 0.0).is_err());
        assert!(EquatorialCoordinates::of(-0.1, 0.0).is_err());
        assert!(EquatorialCoordinates::of(1.0, 1.6).is_err());
        assert!(EquatorialCoordinates::of(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_display() {
        let coord = EquatorialCoordinates::of_deg(90.0, -12.5).unwrap();
        assert_eq!(coord.to_string(), "(ra=6.0000h, dec=-12.5000°)");
    }
}
