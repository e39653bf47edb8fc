//! Coordinate systems and the conversions between them
//!
//! Positions travel through four frames on their way to the screen:
//! ecliptic → equatorial → horizontal → plane. The spherical frames share a
//! private longitude/latitude pair and differ in the ranges they validate and
//! in the names of their accessors.

mod spherical;

pub mod cartesian;
pub mod conversion;
pub mod ecliptic;
pub mod equatorial;
pub mod geographic;
pub mod horizontal;
pub mod projection;

pub use cartesian::CartesianCoordinates;
pub use conversion::{EclipticToEquatorialConversion, EquatorialToHorizontalConversion};
pub use ecliptic::EclipticCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use geographic::GeographicCoordinates;
pub use horizontal::HorizontalCoordinates;
pub use projection::StereographicProjection;
