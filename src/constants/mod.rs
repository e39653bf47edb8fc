//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Arcseconds in one radian
pub const ASEC_PER_RAD: f64 = (360.0 * 3600.0) / TAU;
/// Radians swept by one hour of right ascension
pub const RAD_PER_HOUR: f64 = TAU / 24.0;

// Time constants
/// Milliseconds in a day
pub const MS_PER_DAY: f64 = 8.64e7;
/// Milliseconds in an hour
pub const MS_PER_HOUR: f64 = 3.6e6;
/// Milliseconds in a Julian century (36525 days)
pub const MS_PER_JULIAN_CENTURY: f64 = 3.15576e12;
/// Length of the tropical year in days
pub const TROPICAL_YEAR_DAYS: f64 = 365.242191;
/// Seconds in a day
pub const DAY_S: i64 = 86_400;
/// Seconds in a sidereal day (rounded)
pub const SIDEREAL_DAY_S: i64 = 86_164;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_angle_factors() {
        assert_relative_eq!(ASEC_PER_RAD, 206_264.806_247_096_36, epsilon = 1e-6);
        assert_relative_eq!(RAD_PER_HOUR * 24.0, TAU);
        assert_relative_eq!(DEG2RAD * RAD2DEG, 1.0);
    }

    #[test]
    fn test_julian_century_is_36525_days() {
        assert_relative_eq!(MS_PER_JULIAN_CENTURY / MS_PER_DAY, 36_525.0);
        assert_relative_eq!(MS_PER_DAY / MS_PER_HOUR, 24.0);
    }
}
