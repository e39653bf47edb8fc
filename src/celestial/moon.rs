use std::fmt;

use lazy_static::lazy_static;

use super::{CelestialBody, CelestialObject, CelestialObjectModel, SunModel};
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates};
use crate::math::{angle, ClosedInterval, Interval};
use crate::Result;

const ECCENTRICITY: f64 = 0.0549;

lazy_static! {
    static ref PHASES: ClosedInterval = ClosedInterval::of(0.0, 1.0).expect("[0, 1] is a valid interval");

    static ref MEAN_LON: f64 = angle::of_deg(91.929336);
    static ref MEAN_PERIGEE_LON: f64 = angle::of_deg(130.143076);
    static ref NODE_LON: f64 = angle::of_deg(291.682547);
    static ref ORBIT_TILT: f64 = angle::of_deg(5.145396);
    /// Angular size at a distance of one semi-major axis
    static ref THETA_0: f64 = angle::of_deg(0.5181);

    // Daily motions and correction amplitudes
    static ref LON_RATE: f64 = angle::of_deg(13.1763966);
    static ref PERIGEE_RATE: f64 = angle::of_deg(0.1114041);
    static ref EVECTION: f64 = angle::of_deg(1.2739);
    static ref ANNUAL_EQUATION: f64 = angle::of_deg(0.1858);
    static ref THIRD_CORRECTION: f64 = angle::of_deg(0.37);
    static ref CENTER_EQUATION: f64 = angle::of_deg(6.2886);
    static ref FOURTH_CORRECTION: f64 = angle::of_deg(0.214);
    static ref VARIATION: f64 = angle::of_deg(0.6583);
    static ref NODE_RATE: f64 = angle::of_deg(0.0529539);
    static ref NODE_CORRECTION: f64 = angle::of_deg(0.16);
}

/// The Moon as seen from Earth
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    body: CelestialBody,
    phase: f64,
}

impl Moon {
    /// Creates the Moon, failing unless `phase ∈ [0, 1]`
    pub fn new(equatorial_pos: EquatorialCoordinates, angular_size: f64, magnitude: f64, phase: f64) -> Result<Self> {
        let phase = PHASES.check(phase, "phase")?;
        Ok(Self {
            body: CelestialBody::new("Moon", equatorial_pos, angular_size, magnitude)?,
            phase,
        })
    }

    /// Illuminated fraction of the disk
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl CelestialObject for Moon {
    fn body(&self) -> &CelestialBody {
        &self.body
    }

    fn info(&self) -> String {
        format!("{} ({:.1}%)", self.name(), 100.0 * self.phase)
    }
}

impl fmt::Display for Moon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

/// Model of the apparent motion of the Moon
///
/// A truncated lunar theory: the mean anomaly is corrected for evection, the
/// annual equation and a third term before the equation of the center is
/// applied, and the variation refines the resulting longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoonModel;

impl CelestialObjectModel for MoonModel {
    type Object = Moon;

    fn at(&self, days_since_j2010: f64, conversion: &EclipticToEquatorialConversion) -> Result<Moon> {
        let sun = SunModel.at(days_since_j2010, conversion)?;
        let sun_lon = sun.ecliptic_pos().lon();
        let sin_sun_anomaly = sun.mean_anomaly().sin();

        let mean_lon = *LON_RATE * days_since_j2010 + *MEAN_LON;
        let mean_anomaly = mean_lon - *PERIGEE_RATE * days_since_j2010 - *MEAN_PERIGEE_LON;

        let evection = *EVECTION * (2.0 * (mean_lon - sun_lon) - mean_anomaly).sin();
        let annual_equation = *ANNUAL_EQUATION * sin_sun_anomaly;
        let third_correction = *THIRD_CORRECTION * sin_sun_anomaly;
        let corrected_anomaly = mean_anomaly + evection - annual_equation - third_correction;

        let center_equation = *CENTER_EQUATION * corrected_anomaly.sin();
        let fourth_correction = *FOURTH_CORRECTION * (2.0 * corrected_anomaly).sin();
        let corrected_lon = mean_lon + evection + center_equation - annual_equation + fourth_correction;

        let variation = *VARIATION * (2.0 * (corrected_lon - sun_lon)).sin();
        let true_lon = corrected_lon + variation;

        let mean_node_lon = *NODE_LON - *NODE_RATE * days_since_j2010;
        let corrected_node_lon = mean_node_lon - *NODE_CORRECTION * sin_sun_anomaly;

        let (sin_from_node, cos_from_node) = (true_lon - corrected_node_lon).sin_cos();
        let ecl_lon = (sin_from_node * ORBIT_TILT.cos()).atan2(cos_from_node) + corrected_node_lon;
        let ecl_lat = (sin_from_node * ORBIT_TILT.sin()).asin();
        let ecliptic_pos = EclipticCoordinates::of(angle::normalize_positive(ecl_lon), ecl_lat)?;

        let distance = (1.0 - ECCENTRICITY * ECCENTRICITY)
            / (1.0 + ECCENTRICITY * (corrected_anomaly + center_equation).cos());
        let angular_size = *THETA_0 / distance;
        let phase = (1.0 - (true_lon - sun_lon).cos()) / 2.0;

        Moon::new(conversion.apply(&ecliptic_pos), angular_size, 0.0, phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn september_1_2003() -> EclipticToEquatorialConversion {
        EclipticToEquatorialConversion::new(&Utc.with_ymd_and_hms(2003, 9, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_moon_position() {
        let moon = MoonModel.at(-2313.0, &september_1_2003()).unwrap();
        assert_relative_eq!(moon.equatorial_pos().ra_hr(), 14.211456462003504, epsilon = 1e-8);
        assert_relative_eq!(moon.equatorial_pos().dec(), -0.20114171387374752, epsilon = 1e-9);
    }

    #[test]
    fn test_moon_size_and_phase() {
        let moon = MoonModel.at(-2313.0, &september_1_2003()).unwrap();
        assert_relative_eq!(moon.angular_size(), 0.00954382138519668, epsilon = 1e-9);
        assert_relative_eq!(moon.phase(), 0.2250060814775917, epsilon = 1e-9);
        assert_eq!(moon.magnitude(), 0.0);
        assert_eq!(moon.info(), "Moon (22.5%)");
    }

    #[test]
    fn test_phase_bounds() {
        let pos = EquatorialCoordinates::of(0.0, 0.0).unwrap();
        assert!(Moon::new(pos, 0.009, 0.0, 0.0).is_ok());
        assert!(Moon::new(pos, 0.009, 0.0, 1.0).is_ok());
        assert!(Moon::new(pos, 0.009, 0.0, -0.01).is_err());
        assert!(Moon::new(pos, 0.009, 0.0, 1.01).is_err());
        assert!(Moon::new(pos, -0.009, 0.0, 0.5).is_err());
    }

    #[test]
    fn test_info_rounding() {
        let pos = EquatorialCoordinates::of(0.0, 0.0).unwrap();
        assert_eq!(Moon::new(pos, 0.009, 0.0, 0.3752).unwrap().info(), "Moon (37.5%)");
        assert_eq!(Moon::new(pos, 0.009, 0.0, 1.0).unwrap().to_string(), "Moon (100.0%)");
    }
}
