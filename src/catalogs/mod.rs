//! Star and point-object catalogues
//!
//! Catalogues are immutable once built. Each one has a mutable builder that
//! accumulates validated objects, and loaders fill a builder from a text
//! source handed to them by the caller. The loaders know the column layout
//! of the public data sets the objects usually come from:
//!
//! - the HYG v3 star database ([`HygDatabaseLoader`]),
//! - a one-asterism-per-line list of Hipparcos ids ([`AsterismLoader`]),
//! - the UCS satellite database ([`SatelliteDatabaseLoader`]),
//! - the NUFORC sighting reports ([`UfoDatabaseLoader`]).
//!
//! It also provides the black-body colour table used to tint stars, and a
//! synthetic star generator for demos and benchmarks.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

pub mod asterisms;
pub mod blackbody;
pub mod hyg;
pub mod satellites;
pub mod stars;
pub mod synthetic;
pub mod ufos;

pub use asterisms::AsterismLoader;
pub use blackbody::BlackBodyColor;
pub use hyg::HygDatabaseLoader;
pub use satellites::{SatelliteCatalogue, SatelliteCatalogueBuilder, SatelliteDatabaseLoader};
pub use stars::{StarCatalogue, StarCatalogueBuilder};
pub use synthetic::{random_stars, SyntheticCatalogConfig};
pub use ufos::{UfoCatalogue, UfoCatalogueBuilder, UfoDatabaseLoader};

use crate::{Result, SkyError};

/// Fills a builder of type `B` from a line-oriented text source
pub trait CatalogueLoader<B> {
    fn load<R: BufRead>(&self, reader: R, builder: &mut B) -> Result<()>;
}

/// Opens a catalogue file for reading, decompressing it on the fly when its
/// name ends in `.gz`
pub fn open_catalogue_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if path.to_string_lossy().ends_with(".gz") {
        log::info!("Reading gzipped catalogue {}", path.display());
        Ok(Box::new(BufReader::new(flate2::read::GzDecoder::new(BufReader::new(file)))))
    } else {
        log::info!("Reading catalogue {}", path.display());
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Returns column `index` of a split CSV row, or a parse error naming
/// `line`
pub(crate) fn column<'a>(fields: &[&'a str], index: usize, line: usize) -> Result<&'a str> {
    fields.get(index).copied().ok_or_else(|| SkyError::Parse {
        line,
        message: format!("expected at least {} columns, found {}", index + 1, fields.len()),
    })
}

/// Parses column `index` of a split CSV row, falling back to `default`
/// when the column is empty
pub(crate) fn parse_column_or<T: FromStr>(fields: &[&str], index: usize, line: usize, default: T) -> Result<T> {
    let raw = column(fields, index, line)?.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    parse_value(raw, line)
}

/// Parses a non-empty value, or fails with a parse error naming `line`
pub(crate) fn parse_value<T: FromStr>(raw: &str, line: usize) -> Result<T> {
    raw.trim().parse().map_err(|_| SkyError::Parse {
        line,
        message: format!("cannot parse '{}'", raw),
    })
}
