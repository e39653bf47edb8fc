//! Geostationary satellites from the UCS satellite database

use std::io::BufRead;

use super::{parse_value, CatalogueLoader};
use crate::celestial::ArtificialSatellite;
use crate::coordinates::EquatorialCoordinates;
use crate::math::angle;
use crate::Result;

const NAME: usize = 1;
/// Embedded commas in the purpose columns shift the orbit class between
/// these positions; the longitude always follows two columns later
const ORBIT_CLASS_COLUMNS: std::ops::RangeInclusive<usize> = 7..=10;
const LONGITUDE_OFFSET: usize = 2;

/// An immutable list of artificial satellites
#[derive(Debug, Clone, Default)]
pub struct SatelliteCatalogue {
    satellites: Vec<ArtificialSatellite>,
}

impl SatelliteCatalogue {
    pub fn new(satellites: Vec<ArtificialSatellite>) -> Self {
        Self { satellites }
    }

    pub fn satellites(&self) -> &[ArtificialSatellite] {
        &self.satellites
    }
}

/// Accumulates satellites before freezing them into a [`SatelliteCatalogue`]
#[derive(Debug, Clone, Default)]
pub struct SatelliteCatalogueBuilder {
    satellites: Vec<ArtificialSatellite>,
}

impl SatelliteCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_satellite(&mut self, satellite: ArtificialSatellite) -> &mut Self {
        self.satellites.push(satellite);
        self
    }

    pub fn satellites(&self) -> &[ArtificialSatellite] {
        &self.satellites
    }

    pub fn load_from<R, L>(&mut self, reader: R, loader: &L) -> Result<&mut Self>
    where
        R: BufRead,
        L: CatalogueLoader<Self>,
    {
        loader.load(reader, self)?;
        Ok(self)
    }

    pub fn build(self) -> SatelliteCatalogue {
        SatelliteCatalogue::new(self.satellites)
    }
}

/// Reads the geostationary satellites of the UCS database
///
/// A geostationary satellite sits still above the equator, so it is placed
/// on the celestial equator (declination 0) at a right ascension equal to
/// the absolute value of its longitude. Other orbit classes are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SatelliteDatabaseLoader;

impl CatalogueLoader<SatelliteCatalogueBuilder> for SatelliteDatabaseLoader {
    fn load<R: BufRead>(&self, reader: R, builder: &mut SatelliteCatalogueBuilder) -> Result<()> {
        let mut loaded = 0;
        for (index, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let number = index + 1;
            let fields: Vec<&str> = line.split(',').collect();

            let longitude = ORBIT_CLASS_COLUMNS.clone().find_map(|k| {
                let is_geo = fields.get(k).map(|class| class.trim() == "GEO").unwrap_or(false);
                let lon = fields.get(k + LONGITUDE_OFFSET).map(|lon| lon.trim()).unwrap_or("");
                (is_geo && !lon.is_empty()).then_some(lon)
            });
            let Some(longitude) = longitude else {
                continue;
            };

            let lon_deg: f64 = parse_value(longitude, number)?;
            let ra = angle::normalize_positive(angle::of_deg(lon_deg.abs()));
            let name = fields.get(NAME).copied().unwrap_or("").trim();
            builder.add_satellite(ArtificialSatellite::new(name, EquatorialCoordinates::of(ra, 0.0)?));
            loaded += 1;
        }
        log::info!("Loaded {} geostationary satellites", loaded);
        Ok(())
    }
}
