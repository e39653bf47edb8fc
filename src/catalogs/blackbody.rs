//! Colour of a black body as a function of its temperature
//!
//! Parses Mitchell Charity's `bbr_color` table, whose rows read
//!
//! ```text
//!   1000 K  10deg  0.6482 0.3477  1.000e+00  1.0000 0.0401 0.0000  255  56   0  #ff3800
//! ```
//!
//! Only the rows computed with the 10° colour matching function are kept.

use std::collections::HashMap;
use std::io::BufRead;

use lazy_static::lazy_static;

use super::parse_value;
use crate::math::{round_to_nearest_hundred, ClosedInterval, Interval};
use crate::{Result, SkyError};

lazy_static! {
    static ref TEMPERATURES: ClosedInterval =
        ClosedInterval::of(1000.0, 40000.0).expect("[1000, 40000] is a valid interval");
}

const MATCHING_FUNCTION: &str = "10deg";

/// Temperature (kelvins, multiple of 100) to `#rrggbb` colour table
#[derive(Debug, Clone, Default)]
pub struct BlackBodyColor {
    colors: HashMap<i64, String>,
}

impl BlackBodyColor {
    /// Reads a `bbr_color` table
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut colors = HashMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.get(2) != Some(&MATCHING_FUNCTION) {
                continue;
            }
            let kelvin: i64 = parse_value(fields[0], number)?;
            let color = fields
                .last()
                .filter(|color| color.starts_with('#') && color.len() == 7)
                .ok_or_else(|| SkyError::Parse {
                    line: number,
                    message: "missing #rrggbb colour".to_string(),
                })?;
            colors.insert(kelvin, color.to_string());
        }
        log::info!("Loaded {} black-body colours", colors.len());
        Ok(Self { colors })
    }

    /// The table key for `kelvin`: the temperature rounded to the nearest
    /// hundred
    ///
    /// # Errors
    ///
    /// Fails when `kelvin` is outside `[1000, 40000]`.
    pub fn temperature_key(kelvin: f64) -> Result<i64> {
        Ok(round_to_nearest_hundred(TEMPERATURES.check(kelvin, "temperature")?))
    }

    /// Colour of a black body at `kelvin`, as `#rrggbb`
    pub fn color_for_temperature(&self, kelvin: f64) -> Result<&str> {
        let key = Self::temperature_key(kelvin)?;
        self.colors
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| SkyError::InvalidArgument(format!("no colour for {} K in the table", key)))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
