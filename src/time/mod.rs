//! Time module for astronomical time calculations
//!
//! Elapsed time is always measured from one of two fixed reference epochs and
//! expressed either in days or in Julian centuries. Both use the millisecond
//! count between the two instants, truncated the same way `chrono` truncates
//! [`Duration::num_milliseconds`].
//!
//! Sidereal time lives in [`sidereal`], and the simulated-clock helpers used to
//! animate a sky in [`accelerator`].

pub mod accelerator;
pub mod sidereal;

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;

use crate::constants::{MS_PER_DAY, MS_PER_JULIAN_CENTURY};

pub use accelerator::{NamedTimeAccelerator, TimeAccelerator};

lazy_static! {
    static ref J2000_INSTANT: DateTime<Utc> = Utc
        .with_ymd_and_hms(2000, 1, 1, 12, 0, 0)
        .single()
        .expect("J2000 is a valid UTC instant");
    static ref J2010_INSTANT: DateTime<Utc> = Utc
        .with_ymd_and_hms(2009, 12, 31, 0, 0, 0)
        .single()
        .expect("J2010 is a valid UTC instant");
}

/// Reference epochs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Epoch {
    /// 2000-01-01 12:00 UTC
    J2000,
    /// 2009-12-31 00:00 UTC, the epoch of the orbital elements
    J2010,
}

impl Epoch {
    /// The instant this epoch stands for
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Epoch::J2000 => *J2000_INSTANT,
            Epoch::J2010 => *J2010_INSTANT,
        }
    }

    /// Signed number of days from the epoch to `when`
    pub fn days_until(&self, when: &DateTime<Utc>) -> f64 {
        self.millis_until(when) / MS_PER_DAY
    }

    /// Signed number of Julian centuries from the epoch to `when`
    pub fn julian_centuries_until(&self, when: &DateTime<Utc>) -> f64 {
        self.millis_until(when) / MS_PER_JULIAN_CENTURY
    }

    fn millis_until(&self, when: &DateTime<Utc>) -> f64 {
        (*when - self.instant()).num_milliseconds() as f64
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Epoch::J2000 => write!(f, "J2000"),
            Epoch::J2010 => write!(f, "J2010"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;

    #[test]
    fn test_days_until() {
        let new_year = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Epoch::J2010.days_until(&new_year), 1.0);
        assert_eq!(Epoch::J2000.days_until(&Epoch::J2000.instant()), 0.0);

        let before = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Epoch::J2000.days_until(&before), -0.5);
    }

    #[test]
    fn test_julian_centuries_until() {
        let when = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_relative_eq!(
            Epoch::J2000.julian_centuries_until(&when),
            0.21000684462696784,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_sub_millisecond_truncation() {
        let when = Epoch::J2010.instant() + Duration::microseconds(1_999);
        assert_eq!(Epoch::J2010.days_until(&when), 1.0 / MS_PER_DAY);
    }

    #[test]
    fn test_display() {
        assert_eq!(Epoch::J2000.to_string(), "J2000");
        assert_eq!(Epoch::J2010.to_string(), "J2010");
    }
}
