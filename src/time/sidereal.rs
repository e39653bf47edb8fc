//! Greenwich and local mean sidereal time
//!
//! Both functions return an angle in `[0, τ)`.

use chrono::{DateTime, NaiveTime, Utc};
use lazy_static::lazy_static;

use super::Epoch;
use crate::constants::MS_PER_HOUR;
use crate::coordinates::GeographicCoordinates;
use crate::math::{angle, Polynomial};

lazy_static! {
    /// Sidereal time at 0h UTC, in hours, as a function of Julian centuries
    static ref S0: Polynomial = Polynomial::of(0.000025862, &[2400.051336, 6.697374558])
        .expect("leading coefficient is non-zero");
    /// Sidereal hours elapsed per solar hour since midnight
    static ref S1: Polynomial =
        Polynomial::of(1.002737909, &[0.0]).expect("leading coefficient is non-zero");
}

/// Greenwich sidereal time at `when`
pub fn greenwich(when: &DateTime<Utc>) -> f64 {
    let midnight = when.date_naive().and_time(NaiveTime::MIN).and_utc();
    let centuries = Epoch::J2000.julian_centuries_until(&midnight);
    let hours = (*when - midnight).num_milliseconds() as f64 / MS_PER_HOUR;

    angle::normalize_positive(angle::of_hr(S0.at(centuries) + S1.at(hours)))
}

/// Local sidereal time at `when` for an observer at `where_`
pub fn local(when: &DateTime<Utc>, where_: &GeographicCoordinates) -> f64 {
    angle::normalize_positive(greenwich(when) + where_.lon())
}
