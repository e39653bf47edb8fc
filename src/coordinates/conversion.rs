//! Frame conversions between the spherical coordinate systems
//!
//! Each conversion is built once for a fixed instant (and observer, for the
//! horizontal frame). The trigonometric constants that depend only on those
//! inputs are computed at construction, so `apply` can be called for every
//! object of a catalogue at the cost of a few `sin`/`cos` calls each.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;

use super::{EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates};
use crate::math::{angle, Polynomial};
use crate::time::{sidereal, Epoch};

lazy_static! {
    /// Obliquity of the ecliptic in radians, as a function of Julian
    /// centuries since J2000
    static ref OBLIQUITY: Polynomial = Polynomial::of(
        angle::of_arcsec(0.00181),
        &[
            angle::of_arcsec(-0.0006),
            angle::of_arcsec(-46.815),
            angle::of_dms(23, 26, 21.45).expect("23°26'21.45\" is a valid angle"),
        ],
    )
    .expect("leading coefficient is non-zero");
}

/// Converts ecliptic coordinates to equatorial coordinates at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticToEquatorialConversion {
    cos_obliquity: f64,
    sin_obliquity: f64,
}

impl EclipticToEquatorialConversion {
    pub fn new(when: &DateTime<Utc>) -> Self {
        let obliquity = OBLIQUITY.at(Epoch::J2000.julian_centuries_until(when));
        Self {
            cos_obliquity: obliquity.cos(),
            sin_obliquity: obliquity.sin(),
        }
    }

    pub fn apply(&self, ecl: &EclipticCoordinates) -> EquatorialCoordinates {
        let (sin_lon, cos_lon) = ecl.lon().sin_cos();
        let (sin_lat, cos_lat) = ecl.lat().sin_cos();

        let ra = (sin_lon * self.cos_obliquity - ecl.lat().tan() * self.sin_obliquity).atan2(cos_lon);
        let sin_dec = sin_lat * self.cos_obliquity + cos_lat * self.sin_obliquity * sin_lon;

        EquatorialCoordinates::from_normalized(
            angle::normalize_positive(ra),
            sin_dec.clamp(-1.0, 1.0).asin(),
        )
    }
}

/// Converts equatorial coordinates to horizontal coordinates for a fixed
/// instant and observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialToHorizontalConversion {
    local_sidereal_time: f64,
    cos_lat: f64,
    sin_lat: f64,
}

impl EquatorialToHorizontalConversion {
    pub fn new(when: &DateTime<Utc>, where_: &GeographicCoordinates) -> Self {
        Self {
            local_sidereal_time: sidereal::local(when, where_),
            cos_lat: where_.lat().cos(),
            sin_lat: where_.lat().sin(),
        }
    }

    pub fn apply(&self, equ: &EquatorialCoordinates) -> HorizontalCoordinates {
        let hour_angle = self.local_sidereal_time - equ.ra();
        let (sin_hour_angle, cos_hour_angle) = hour_angle.sin_cos();
        let (sin_dec, cos_dec) = equ.dec().sin_cos();

        let sin_alt = sin_dec * self.sin_lat + cos_dec * self.cos_lat * cos_hour_angle;
        let alt = sin_alt.clamp(-1.0, 1.0).asin();
        let az = (-cos_dec * self.cos_lat * sin_hour_angle).atan2(sin_dec - self.sin_lat * alt.sin());

        HorizontalCoordinates::from_normalized(angle::normalize_positive(az), alt)
    }
}
