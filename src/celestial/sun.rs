use std::fmt;

use lazy_static::lazy_static;

use super::{CelestialBody, CelestialObject, CelestialObjectModel};
use crate::constants::{TAU, TROPICAL_YEAR_DAYS};
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates};
use crate::math::angle;
use crate::Result;

const SUN_MAGNITUDE: f64 = -26.7;
const ECCENTRICITY: f64 = 0.016705;

lazy_static! {
    static ref LON_AT_J2010: f64 = angle::of_deg(279.557208);
    static ref LON_AT_PERIGEE: f64 = angle::of_deg(283.112438);
    /// Angular size at a distance of one semi-major axis
    static ref THETA_0: f64 = angle::of_deg(0.533128);
}

/// The Sun as seen from Earth
#[derive(Debug, Clone, PartialEq)]
pub struct Sun {
    body: CelestialBody,
    ecliptic_pos: EclipticCoordinates,
    mean_anomaly: f64,
}

impl Sun {
    pub fn new(
        ecliptic_pos: EclipticCoordinates,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        mean_anomaly: f64,
    ) -> Result<Self> {
        Ok(Self {
            body: CelestialBody::new("Sun", equatorial_pos, angular_size, SUN_MAGNITUDE)?,
            ecliptic_pos,
            mean_anomaly,
        })
    }

    pub fn ecliptic_pos(&self) -> &EclipticCoordinates {
        &self.ecliptic_pos
    }

    /// Mean anomaly in radians, not normalized
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }
}

impl CelestialObject for Sun {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

impl fmt::Display for Sun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

/// Model of the apparent motion of the Sun
///
/// The Earth's orbit is treated as a Keplerian ellipse; the equation of the
/// center is truncated to its first term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SunModel;

impl CelestialObjectModel for SunModel {
    type Object = Sun;

    fn at(&self, days_since_j2010: f64, conversion: &EclipticToEquatorialConversion) -> Result<Sun> {
        let mean_anomaly = TAU / TROPICAL_YEAR_DAYS * days_since_j2010 + (*LON_AT_J2010 - *LON_AT_PERIGEE);
        let true_anomaly = mean_anomaly + 2.0 * ECCENTRICITY * mean_anomaly.sin();

        let angular_size =
            *THETA_0 * (1.0 + ECCENTRICITY * true_anomaly.cos()) / (1.0 - ECCENTRICITY * ECCENTRICITY);
        let ecliptic_pos = EclipticCoordinates::of(angle::normalize_positive(true_anomaly + *LON_AT_PERIGEE), 0.0)?;

        Sun::new(ecliptic_pos, conversion.apply(&ecliptic_pos), angular_size, mean_anomaly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_sun_position() {
        let when = Utc.with_ymd_and_hms(2003, 7, 27, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let sun = SunModel.at(-2349.0, &conversion).unwrap();

        assert_relative_eq!(sun.equatorial_pos().ra_hr(), 8.392682808297808, epsilon = 1e-10);
        assert_relative_eq!(sun.equatorial_pos().dec_deg(), 19.35288373097352, epsilon = 1e-10);
        assert_eq!(sun.ecliptic_pos().lat(), 0.0);
    }

    #[test]
    fn test_sun_properties() {
        let when = Utc.with_ymd_and_hms(2020, 1, 4, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let sun = SunModel.at(3656.0, &conversion).unwrap();

        assert_eq!(sun.name(), "Sun");
        assert_eq!(sun.info(), "Sun");
        assert_eq!(sun.magnitude(), -26.7);
        // Early January, the Earth is near perihelion so the Sun looks largest
        assert!(sun.angular_size() > angle::of_deg(0.533128));
        assert!(sun.angular_size() < angle::of_deg(0.55));
    }

    #[test]
    fn test_model_is_deterministic() {
        let when = Utc.with_ymd_and_hms(2010, 6, 1, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        assert_eq!(SunModel.at(152.0, &conversion).unwrap(), SunModel.at(152.0, &conversion).unwrap());
    }
}
