//! Simulated clocks
//!
//! A [`TimeAccelerator`] maps the real time spent since an animation started
//! to the simulated instant the sky should be computed for.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::constants::{DAY_S, SIDEREAL_DAY_S};

/// Maps elapsed real time to simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAccelerator {
    /// Simulated time runs `alpha` times faster than real time
    Continuous(i64),
    /// Simulated time advances by `step`, `frequency` times per real second
    Discrete { frequency: i64, step: Duration },
}

impl TimeAccelerator {
    /// Simulated instant after `elapsed_nanos` nanoseconds of real time,
    /// starting from `initial`
    ///
    /// Returns `None` once the simulated instant leaves the range of
    /// representable dates.
    pub fn adjust(&self, initial: DateTime<Utc>, elapsed_nanos: i64) -> Option<DateTime<Utc>> {
        let offset = match *self {
            TimeAccelerator::Continuous(alpha) => Duration::nanoseconds(elapsed_nanos.checked_mul(alpha)?),
            TimeAccelerator::Discrete { frequency, step } => {
                let ticks = (frequency as f64 * elapsed_nanos as f64 * 1e-9).floor();
                step.checked_mul(i32::try_from(ticks as i64).ok()?)?
            }
        };
        initial.checked_add_signed(offset)
    }
}

/// The accelerators offered to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedTimeAccelerator {
    Times1,
    Times30,
    Times300,
    Times3000,
    Day,
    SiderealDay,
}

impl NamedTimeAccelerator {
    pub const ALL: [NamedTimeAccelerator; 6] = [
        NamedTimeAccelerator::Times1,
        NamedTimeAccelerator::Times30,
        NamedTimeAccelerator::Times300,
        NamedTimeAccelerator::Times3000,
        NamedTimeAccelerator::Day,
        NamedTimeAccelerator::SiderealDay,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            NamedTimeAccelerator::Times1 => "1x",
            NamedTimeAccelerator::Times30 => "30x",
            NamedTimeAccelerator::Times300 => "300x",
            NamedTimeAccelerator::Times3000 => "3000x",
            NamedTimeAccelerator::Day => "day",
            NamedTimeAccelerator::SiderealDay => "sidereal day",
        }
    }

    /// The accelerator behind the name
    pub fn accelerator(&self) -> TimeAccelerator {
        match self {
            NamedTimeAccelerator::Times1 => TimeAccelerator::Continuous(1),
            NamedTimeAccelerator::Times30 => TimeAccelerator::Continuous(30),
            NamedTimeAccelerator::Times300 => TimeAccelerator::Continuous(300),
            NamedTimeAccelerator::Times3000 => TimeAccelerator::Continuous(3000),
            NamedTimeAccelerator::Day => TimeAccelerator::Discrete {
                frequency: 60,
                step: Duration::seconds(DAY_S),
            },
            NamedTimeAccelerator::SiderealDay => TimeAccelerator::Discrete {
                frequency: 60,
                step: Duration::seconds(SIDEREAL_DAY_S),
            },
        }
    }
}

impl fmt::Display for NamedTimeAccelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
