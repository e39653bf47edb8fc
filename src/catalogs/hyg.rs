//! Loader for the HYG v3 star database (CSV)

use std::io::BufRead;

use super::{column, parse_column_or, parse_value, CatalogueLoader, StarCatalogueBuilder};
use crate::celestial::Star;
use crate::coordinates::EquatorialCoordinates;
use crate::Result;

const HIP: usize = 1;
const PROPER: usize = 6;
const MAG: usize = 13;
const CI: usize = 16;
const RARAD: usize = 23;
const DECRAD: usize = 24;
const BAYER: usize = 27;
const CON: usize = 29;

/// Reads stars from the HYG database
///
/// The header row is skipped. Missing Hipparcos ids, magnitudes and colour
/// indices default to 0; a star without a proper name is named after its
/// Bayer designation and constellation (`"? Ori"` when the designation is
/// missing too). Rows whose values fail validation are skipped with a
/// warning; rows that cannot be parsed abort the load.
#[derive(Debug, Clone, Copy, Default)]
pub struct HygDatabaseLoader;

impl CatalogueLoader<StarCatalogueBuilder> for HygDatabaseLoader {
    fn load<R: BufRead>(&self, reader: R, builder: &mut StarCatalogueBuilder) -> Result<()> {
        let mut loaded = 0;
        for (index, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let number = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();

            let hipparcos_id = parse_column_or(&fields, HIP, number, 0_i32)?;
            let name = match column(&fields, PROPER, number)? {
                "" => {
                    let bayer = match column(&fields, BAYER, number)? {
                        "" => "?",
                        bayer => bayer,
                    };
                    format!("{} {}", bayer, column(&fields, CON, number)?)
                }
                proper => proper.to_string(),
            };
            let magnitude = parse_column_or(&fields, MAG, number, 0.0)?;
            let color_index = parse_column_or(&fields, CI, number, 0.0)?;
            let ra: f64 = parse_value(column(&fields, RARAD, number)?, number)?;
            let dec: f64 = parse_value(column(&fields, DECRAD, number)?, number)?;

            match EquatorialCoordinates::of(ra, dec)
                .and_then(|pos| Star::new(hipparcos_id, name, pos, magnitude, color_index))
            {
                Ok(star) => {
                    builder.add_star(star);
                    loaded += 1;
                }
                Err(e) => log::warn!("Skipping HYG line {}: {}", number, e),
            }
        }
        log::info!("Loaded {} stars from the HYG database", loaded);
        Ok(())
    }
}
