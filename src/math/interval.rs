//! Closed and right-open intervals of the real line
//!
//! Intervals are the validation vocabulary of the crate: every coordinate
//! range, every sexagesimal component and every catalogue bound is checked
//! against one of the two kinds defined here.

use std::fmt;

use crate::{check_argument, Result, SkyError};

/// Common behaviour of a bounded interval
pub trait Interval {
    /// Lower bound
    fn low(&self) -> f64;

    /// Upper bound
    fn high(&self) -> f64;

    /// Distance between the two bounds
    fn size(&self) -> f64 {
        self.high() - self.low()
    }

    /// Whether `v` belongs to the interval
    fn contains(&self, v: f64) -> bool;

    /// Returns `value` unchanged when it belongs to the interval, or an
    /// [`SkyError::InvalidArgument`] naming `what` otherwise
    fn check(&self, value: f64, what: &str) -> Result<f64>
    where
        Self: fmt::Display,
    {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(SkyError::InvalidArgument(format!(
                "{} = {} is outside {}",
                what, value, self
            )))
        }
    }
}

/// The interval `[low, high]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    /// Creates `[low, high]`, failing unless `low < high`
    pub fn of(low: f64, high: f64) -> Result<Self> {
        check_argument(low < high, || {
            format!("closed interval needs low < high, got [{}, {}]", low, high)
        })?;
        Ok(Self { low, high })
    }

    /// Creates `[-size/2, size/2]`, failing unless `size > 0`
    pub fn symmetric(size: f64) -> Result<Self> {
        check_argument(size > 0.0, || {
            format!("symmetric interval needs a positive size, got {}", size)
        })?;
        Ok(Self {
            low: -size / 2.0,
            high: size / 2.0,
        })
    }

    /// Saturates `v` to the bounds of the interval
    pub fn clip(&self, v: f64) -> f64 {
        if v <= self.low {
            self.low
        } else if v >= self.high {
            self.high
        } else {
            v
        }
    }
}

impl Interval for ClosedInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        v >= self.low && v <= self.high
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// The interval `[low, high[`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    /// Creates `[low, high[`, failing unless `high > low`
    pub fn of(low: f64, high: f64) -> Result<Self> {
        check_argument(high > low, || {
            format!("right-open interval needs high > low, got [{}, {}[", low, high)
        })?;
        Ok(Self { low, high })
    }

    /// Creates `[-size/2, size/2[`, failing unless `size > 0`
    pub fn symmetric(size: f64) -> Result<Self> {
        check_argument(size > 0.0, || {
            format!("symmetric interval needs a positive size, got {}", size)
        })?;
        Ok(Self {
            low: -size / 2.0,
            high: size / 2.0,
        })
    }

    /// Wraps `v` into the interval with floor-modulo semantics
    ///
    /// Unlike the `%` operator this handles values below `low` correctly:
    /// `[0, 360[.reduce(-90) == 270`.
    pub fn reduce(&self, v: f64) -> f64 {
        let size = self.size();
        let offset = v - self.low;
        let wrapped = offset - size * (offset / size).floor();
        // Tiny negative offsets round up to exactly `size`
        if wrapped >= size {
            self.low
        } else {
            self.low + wrapped
        }
    }
}

impl Interval for RightOpenInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        v >= self.low && v < self.high
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}[", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TAU;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_closed_interval_rejects_empty_bounds() {
        assert!(ClosedInterval::of(1.0, 1.0).is_err());
        assert!(ClosedInterval::of(2.0, 1.0).is_err());
        assert!(ClosedInterval::of(f64::NAN, 1.0).is_err());
        assert!(ClosedInterval::symmetric(0.0).is_err());
        assert!(ClosedInterval::symmetric(-3.0).is_err());
    }

    #[test]
    fn test_right_open_interval_rejects_empty_bounds() {
        assert!(RightOpenInterval::of(1.0, 1.0).is_err());
        assert!(RightOpenInterval::of(3.0, -1.0).is_err());
        assert!(RightOpenInterval::symmetric(0.0).is_err());
    }

    #[test]
    fn test_symmetric_bounds() {
        let closed = ClosedInterval::symmetric(180.0).unwrap();
        assert_eq!(closed.low(), -90.0);
        assert_eq!(closed.high(), 90.0);
        assert!(closed.contains(90.0));
        assert!(closed.contains(-90.0));

        let open = RightOpenInterval::symmetric(360.0).unwrap();
        assert_eq!(open.size(), 360.0);
        assert!(open.contains(-180.0));
        assert!(!open.contains(180.0));
    }

    #[rstest]
    #[case(-5.0, -1.0)]
    #[case(-1.0, -1.0)]
    #[case(0.25, 0.25)]
    #[case(2.0, 2.0)]
    #[case(7.5, 2.0)]
    fn test_clip(#[case] value: f64, #[case] expected: f64) {
        let interval = ClosedInterval::of(-1.0, 2.0).unwrap();
        let clipped = interval.clip(value);
        assert_eq!(clipped, expected);
        assert_eq!(interval.clip(clipped), clipped);
        assert_eq!(clipped == value, interval.contains(value));
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(-90.0, 270.0)]
    #[case(360.0, 0.0)]
    #[case(725.0, 5.0)]
    #[case(-725.0, 355.0)]
    fn test_reduce_degrees(#[case] value: f64, #[case] expected: f64) {
        let interval = RightOpenInterval::of(0.0, 360.0).unwrap();
        assert_relative_eq!(interval.reduce(value), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_reduce_is_idempotent_and_periodic() {
        let turn = RightOpenInterval::of(0.0, TAU).unwrap();
        for i in (-40..40).filter(|i| *i != 0) {
            let v = i as f64 * 0.37;
            let reduced = turn.reduce(v);
            assert!(turn.contains(reduced), "{} reduced to {}", v, reduced);
            assert_eq!(turn.reduce(reduced), reduced);
            for k in [-3.0, -1.0, 1.0, 4.0] {
                assert_relative_eq!(turn.reduce(v + k * TAU), reduced, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_reduce_never_reaches_open_bound() {
        let turn = RightOpenInterval::of(0.0, TAU).unwrap();
        let reduced = turn.reduce(-1e-20);
        assert!(reduced < TAU);
        assert!(reduced >= 0.0);
    }

    #[test]
    fn test_check_reports_the_offending_value() {
        let interval = ClosedInterval::of(-0.5, 5.5).unwrap();
        assert_eq!(interval.check(1.0, "color index").unwrap(), 1.0);

        let err = interval.check(6.0, "color index").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: color index = 6 is outside [-0.5,5.5]"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ClosedInterval::of(0.0, 1.0).unwrap().to_string(), "[0,1]");
        assert_eq!(
            RightOpenInterval::of(0.0, 60.0).unwrap().to_string(),
            "[0,60["
        );
    }
}
