//! Numeric primitives shared by the coordinate pipeline
//!
//! Angle conversions, intervals used for range validation, and polynomials
//! used by the sidereal time and obliquity series.

pub mod angle;
pub mod interval;
pub mod polynomial;

pub use interval::{ClosedInterval, Interval, RightOpenInterval};
pub use polynomial::Polynomial;

/// Rounds a positive value to the nearest multiple of one hundred
///
/// Halves round up, so `3850.0` gives `3900`.
pub fn round_to_nearest_hundred(value: f64) -> i64 {
    ((value / 100.0).round() * 100.0) as i64
}
