//! Skyview: apparent positions of the Sun, Moon, planets and stars
//!
//! This crate evaluates closed-form models of the solar system bodies at an
//! arbitrary instant, carries every position through the ecliptic, equatorial
//! and horizontal frames, and projects the observer's sky onto a plane with a
//! stereographic projection. The resulting [`ObservedSky`] snapshot answers
//! nearest-object queries in that plane.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use skyview::catalogs::{SatelliteCatalogue, StarCatalogue, UfoCatalogue};
//! use skyview::coordinates::{GeographicCoordinates, HorizontalCoordinates, StereographicProjection};
//! use skyview::ObservedSky;
//!
//! let when = Utc.with_ymd_and_hms(2020, 2, 17, 20, 15, 0).unwrap();
//! let observer = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
//! let projection = StereographicProjection::new(HorizontalCoordinates::of_deg(180.0, 22.0).unwrap());
//!
//! let stars = StarCatalogue::new(Vec::new(), Vec::new()).unwrap();
//! let satellites = SatelliteCatalogue::new(Vec::new());
//! let ufos = UfoCatalogue::new(Vec::new());
//!
//! let sky = ObservedSky::new(when, &observer, projection, &stars, &satellites, &ufos).unwrap();
//! assert_eq!(sky.planets().len(), 7);
//! ```

use thiserror::Error;

pub mod catalogs;
pub mod celestial;
pub mod constants;
pub mod coordinates;
pub mod math;
pub mod sky;
pub mod time;

// Re-export commonly used types
pub use celestial::{CelestialObject, CelestialObjectModel};
pub use coordinates::{
    CartesianCoordinates, EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates,
    HorizontalCoordinates, StereographicProjection,
};
pub use sky::{build_observed_sky, ObservedSky, SkyObject};
pub use time::Epoch;

/// Main error type for the skyview library
#[derive(Debug, Error)]
pub enum SkyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Asterism is not part of this catalogue")]
    UnknownAsterism,

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for skyview operations
pub type Result<T> = std::result::Result<T, SkyError>;

/// Fails with [`SkyError::InvalidArgument`] unless `condition` holds
pub(crate) fn check_argument(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(SkyError::InvalidArgument(message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_argument() {
        assert!(check_argument(true, || "unused".to_string()).is_ok());

        let err = check_argument(false, || "size must be positive".to_string()).unwrap_err();
        assert!(matches!(err, SkyError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: size must be positive");
    }
}
