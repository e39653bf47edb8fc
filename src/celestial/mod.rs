//! Celestial objects and the models that place them on the sky
//!
//! Every object shares a [`CelestialBody`] record (name, equatorial position,
//! angular size, magnitude) and exposes it through the [`CelestialObject`]
//! trait. Objects whose position changes over time (the Sun, the Moon and the
//! planets) are produced by a [`CelestialObjectModel`] evaluated at a number
//! of days since [`Epoch::J2010`](crate::time::Epoch::J2010); stars and the
//! artificial point objects come from catalogues and never move.

pub mod artificial;
pub mod moon;
pub mod planet;
pub mod star;
pub mod sun;

use lazy_static::lazy_static;

use crate::coordinates::{EclipticToEquatorialConversion, EquatorialCoordinates, StereographicProjection};
use crate::math::{angle, ClosedInterval};
use crate::{check_argument, Result};

pub use artificial::{ArtificialSatellite, Ufo};
pub use moon::{Moon, MoonModel};
pub use planet::{Planet, PlanetModel};
pub use star::{Asterism, Star};
pub use sun::{Sun, SunModel};

lazy_static! {
    static ref DISPLAYED_MAGNITUDES: ClosedInterval =
        ClosedInterval::of(-2.0, 5.0).expect("[-2, 5] is a valid interval");
}

/// Properties shared by every celestial object
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    name: String,
    equatorial_pos: EquatorialCoordinates,
    angular_size: f64,
    magnitude: f64,
}

impl CelestialBody {
    /// Creates a body, failing when `angular_size` is negative
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
    ) -> Result<Self> {
        check_argument(angular_size >= 0.0, || {
            format!("angular size must be non-negative, got {}", angular_size)
        })?;
        Ok(Self {
            name: name.into(),
            equatorial_pos,
            angular_size,
            magnitude,
        })
    }
}

/// Read access to the shared properties of a celestial object
pub trait CelestialObject {
    /// The shared record this object is built on
    fn body(&self) -> &CelestialBody;

    fn name(&self) -> &str {
        &self.body().name
    }

    fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.body().equatorial_pos
    }

    /// Angular diameter in radians
    fn angular_size(&self) -> f64 {
        self.body().angular_size
    }

    /// Apparent magnitude; lower is brighter
    fn magnitude(&self) -> f64 {
        self.body().magnitude
    }

    /// Short description shown to users
    fn info(&self) -> String {
        self.name().to_string()
    }
}

/// A model computing the state of an object at a given instant
pub trait CelestialObjectModel {
    type Object: CelestialObject;

    /// Evaluates the model `days_since_j2010` days after J2010, using
    /// `conversion` to reach equatorial coordinates
    fn at(&self, days_since_j2010: f64, conversion: &EclipticToEquatorialConversion) -> Result<Self::Object>;
}

/// Diameter on the projection plane of the disk drawn for an object of the
/// given magnitude
///
/// Magnitudes are clipped to `[-2, 5]`; the brightest objects get the disk of
/// a half-degree object, the faintest about a tenth of it.
pub fn diameter_for_magnitude(magnitude: f64, projection: &StereographicProjection) -> f64 {
    let clipped = DISPLAYED_MAGNITUDES.clip(magnitude);
    let size_factor = (99.0 - 17.0 * clipped) / 140.0;
    size_factor * projection.apply_to_angle(angle::of_deg(0.5))
}
