//! # Angle Utilities
//!
//! Angles are plain `f64` radians throughout the crate. This module gathers
//! the conversions between radians and the units astronomers write angles in
//! (degrees, hours, arcseconds, degree-minute-second triples) and the
//! normalization that keeps longitudes in `[0, τ)`.
//!
//! ## Examples
//!
//! ```rust
//! use skyview::math::angle;
//!
//! let right_angle = angle::of_deg(90.0);
//! assert!((angle::to_hr(right_angle) - 6.0).abs() < 1e-12);
//!
//! // Negative angles wrap around rather than being truncated
//! let wrapped = angle::normalize_positive(-right_angle);
//! assert!((angle::to_deg(wrapped) - 270.0).abs() < 1e-12);
//! ```

use lazy_static::lazy_static;

use crate::constants::{ASEC_PER_RAD, DEG2RAD, RAD2DEG, RAD_PER_HOUR, TAU};
use crate::math::interval::{Interval, RightOpenInterval};
use crate::{check_argument, Result};

lazy_static! {
    static ref FULL_TURN: RightOpenInterval =
        RightOpenInterval::of(0.0, TAU).expect("[0, tau[ is a valid interval");
    static ref SEXAGESIMAL: RightOpenInterval =
        RightOpenInterval::of(0.0, 60.0).expect("[0, 60[ is a valid interval");
}

/// Reduces `rad` to `[0, τ)` with floor-modulo semantics
pub fn normalize_positive(rad: f64) -> f64 {
    FULL_TURN.reduce(rad)
}

/// Converts arcseconds to radians
pub fn of_arcsec(sec: f64) -> f64 {
    sec / ASEC_PER_RAD
}

/// Converts a degree-minute-second triple to radians
///
/// # Errors
///
/// Fails when `deg` is negative or when `min` or `sec` fall outside `[0, 60)`.
pub fn of_dms(deg: i32, min: i32, sec: f64) -> Result<f64> {
    check_argument(deg >= 0, || format!("degrees must be non-negative, got {}", deg))?;
    SEXAGESIMAL.check(min as f64, "minutes")?;
    SEXAGESIMAL.check(sec, "seconds")?;
    Ok(of_arcsec(deg as f64 * 3600.0 + min as f64 * 60.0 + sec))
}

/// Converts degrees to radians
pub fn of_deg(deg: f64) -> f64 {
    deg * DEG2RAD
}

/// Converts radians to degrees
pub fn to_deg(rad: f64) -> f64 {
    rad * RAD2DEG
}

/// Converts hours to radians
pub fn of_hr(hr: f64) -> f64 {
    hr * RAD_PER_HOUR
}

/// Converts radians to hours
pub fn to_hr(rad: f64) -> f64 {
    rad / RAD_PER_HOUR
}
