//! Loader for asterism lists
//!
//! One asterism per line, given as comma-separated Hipparcos ids:
//!
//! ```text
//! 27989,26727,27366,26311,25930,24436,25336,27989
//! ```

use std::collections::HashMap;
use std::io::BufRead;

use super::{parse_value, CatalogueLoader, StarCatalogueBuilder};
use crate::celestial::{Asterism, Star};
use crate::Result;

/// Builds asterisms out of the stars already in the builder
///
/// Load the stars first. Ids with no matching star are skipped; a line none
/// of whose ids match is an empty asterism and fails the load.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsterismLoader;

impl CatalogueLoader<StarCatalogueBuilder> for AsterismLoader {
    fn load<R: BufRead>(&self, reader: R, builder: &mut StarCatalogueBuilder) -> Result<()> {
        // Later stars win when ids repeat
        let by_id: HashMap<i32, &Star> = builder.stars().iter().map(|s| (s.hipparcos_id(), s)).collect();

        let mut asterisms = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut stars = Vec::new();
            for raw in line.split(',') {
                let id: i32 = parse_value(raw, number)?;
                match by_id.get(&id) {
                    Some(star) => stars.push((*star).clone()),
                    None => log::debug!("Asterism line {}: no star with HIP {}", number, id),
                }
            }
            asterisms.push(Asterism::new(stars)?);
        }

        log::info!("Loaded {} asterisms", asterisms.len());
        for asterism in asterisms {
            builder.add_asterism(asterism);
        }
        Ok(())
    }
}
