use std::fmt;

use lazy_static::lazy_static;

use super::spherical::SphericalCoordinates;
use crate::constants::TAU;
use crate::math::{angle, ClosedInterval, Interval, RightOpenInterval};
use crate::Result;

lazy_static! {
    static ref AZ_RANGE: RightOpenInterval =
        RightOpenInterval::of(0.0, TAU).expect("[0, tau[ is a valid interval");
    static ref ALT_RANGE: ClosedInterval =
        ClosedInterval::symmetric(TAU / 2.0).expect("[-tau/4, tau/4] is a valid interval");
}

/// Horizontal coordinates (azimuth, altitude) in radians
///
/// Azimuth is measured from the north towards the east; altitude is the
/// height above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates(SphericalCoordinates);

impl HorizontalCoordinates {
    /// Creates horizontal coordinates, validating `az ∈ [0, τ)` and
    /// `alt ∈ [-τ/4, τ/4]`
    pub fn of(az: f64, alt: f64) -> Result<Self> {
        let az = AZ_RANGE.check(az, "azimuth")?;
        let alt = ALT_RANGE.check(alt, "altitude")?;
        Ok(Self(SphericalCoordinates::new(az, alt)))
    }

    /// Creates horizontal coordinates from degrees
    pub fn of_deg(az_deg: f64, alt_deg: f64) -> Result<Self> {
        Self::of(angle::of_deg(az_deg), angle::of_deg(alt_deg))
    }

    /// Builds coordinates the caller has already reduced to the valid ranges
    pub(crate) fn from_normalized(az: f64, alt: f64) -> Self {
        debug_assert!(AZ_RANGE.contains(az) && ALT_RANGE.contains(alt));
        Self(SphericalCoordinates::new(az, alt))
    }

    /// Azimuth in radians
    pub fn az(&self) -> f64 {
        self.0.lon()
    }

    /// Azimuth in degrees
    pub fn az_deg(&self) -> f64 {
        self.0.lon_deg()
    }

    /// Altitude in radians
    pub fn alt(&self) -> f64 {
        self.0.lat()
    }

    /// Altitude in degrees
    pub fn alt_deg(&self) -> f64 {
        self.0.lat_deg()
    }

    /// Names the octant the azimuth points to, built from the four cardinal
    /// labels (`"N"`, `"NE"`, `"E"`, …)
    pub fn az_octant_name(&self, n: &str, e: &str, s: &str, w: &str) -> String {
        match (self.az() * 8.0 / TAU).round() as u8 {
            1 => format!("{}{}", n, e),
            2 => e.to_string(),
            3 => format!("{}{}", s, e),
            4 => s.to_string(),
            5 => format!("{}{}", s, w),
            6 => w.to_string(),
            7 => format!("{}{}", n, w),
            _ => n.to_string(),
        }
    }

    /// Great-circle distance to `that`, in radians
    pub fn angular_distance_to(&self, that: &HorizontalCoordinates) -> f64 {
        let cos_distance = self.alt().sin() * that.alt().sin()
            + self.alt().cos() * that.alt().cos() * (self.az() - that.az()).cos();
        cos_distance.clamp(-1.0, 1.0).acos()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az={:.4}°, alt={:.4}°)", self.az_deg(), self.alt_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_horizontal_ranges() {
        assert!(HorizontalCoordinates::of_deg(359.9, 90.0).is_ok());
        assert!(HorizontalCoordinates::of_deg(360.0, 0.0).is_err());
        assert!(HorizontalCoordinates::of_deg(10.0, -90.5).is_err());
    }

    #[test]
    fn test_angular_distance() {
        // EPFL to Moscow, expressed as azimuth/altitude pairs
        let epfl = HorizontalCoordinates::of_deg(6.5682, 46.5183).unwrap();
        let moscow = HorizontalCoordinates::of_deg(37.6176, 55.7558).unwrap();
        assert_relative_eq!(epfl.angular_distance_to(&moscow), 0.3721396913, epsilon = 1e-9);
        assert_relative_eq!(
            epfl.angular_distance_to(&moscow),
            moscow.angular_distance_to(&epfl),
            epsilon = 1e-15
        );

        let point = HorizontalCoordinates::of_deg(120.0, 10.0).unwrap();
        assert_relative_eq!(point.angular_distance_to(&point), 0.0, epsilon = 1e-7);
    }

    #[rstest]
    #[case(0.0, "N")]
    #[case(22.4, "N")]
    #[case(45.0, "NE")]
    #[case(90.0, "E")]
    #[case(135.0, "SE")]
    #[case(180.0, "S")]
    #[case(225.0, "SO")]
    #[case(270.0, "O")]
    #[case(315.0, "NO")]
    #[case(355.0, "N")]
    fn test_az_octant_name(#[case] az_deg: f64, #[case] expected: &str) {
        let coord = HorizontalCoordinates::of_deg(az_deg, 0.0).unwrap();
        assert_eq!(coord.az_octant_name("N", "E", "S", "O"), expected);
    }

    #[test]
    fn test_display() {
        let coord = HorizontalCoordinates::of_deg(350.0, 7.2).unwrap();
        assert_eq!(coord.to_string(), "(az=350.0000°, alt=7.2000°)");
    }
}
