use std::f64::consts::PI;
use std::fmt;

use super::{CelestialBody, CelestialObject, CelestialObjectModel};
use crate::constants::{TAU, TROPICAL_YEAR_DAYS};
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates};
use crate::math::angle;
use crate::{check_argument, Result};

/// A planet of the solar system as seen from Earth
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    body: CelestialBody,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
    ) -> Result<Self> {
        Ok(Self {
            body: CelestialBody::new(name, equatorial_pos, angular_size, magnitude)?,
        })
    }
}

impl CelestialObject for Planet {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

/// Orbital elements at J2010
///
/// Angles are in degrees except `theta_0`, the angular size at 1 AU, which is
/// in arcseconds.
struct OrbitalElements {
    /// Revolution period in tropical years
    period: f64,
    lon_at_j2010: f64,
    lon_at_perigee: f64,
    eccentricity: f64,
    /// Semi-major axis in AU
    semi_major_axis: f64,
    tilt: f64,
    node_lon: f64,
    theta_0: f64,
    magnitude_at_1_au: f64,
}

const MERCURY: OrbitalElements = OrbitalElements {
    period: 0.24085,
    lon_at_j2010: 75.5671,
    lon_at_perigee: 77.612,
    eccentricity: 0.205627,
    semi_major_axis: 0.387098,
    tilt: 7.0051,
    node_lon: 48.449,
    theta_0: 6.74,
    magnitude_at_1_au: -0.42,
};

const VENUS: OrbitalElements = OrbitalElements {
    period: 0.615207,
    lon_at_j2010: 272.30044,
    lon_at_perigee: 131.54,
    eccentricity: 0.006812,
    semi_major_axis: 0.723329,
    tilt: 3.3947,
    node_lon: 76.769,
    theta_0: 16.92,
    magnitude_at_1_au: -4.40,
};

const EARTH: OrbitalElements = OrbitalElements {
    period: 0.999996,
    lon_at_j2010: 99.556772,
    lon_at_perigee: 103.2055,
    eccentricity: 0.016671,
    semi_major_axis: 0.999985,
    tilt: 0.0,
    node_lon: 0.0,
    theta_0: 0.0,
    magnitude_at_1_au: 0.0,
};

const MARS: OrbitalElements = OrbitalElements {
    period: 1.880765,
    lon_at_j2010: 109.09646,
    lon_at_perigee: 336.217,
    eccentricity: 0.093348,
    semi_major_axis: 1.523689,
    tilt: 1.8497,
    node_lon: 49.632,
    theta_0: 9.36,
    magnitude_at_1_au: -1.52,
};

const JUPITER: OrbitalElements = OrbitalElements {
    period: 11.857911,
    lon_at_j2010: 337.917132,
    lon_at_perigee: 14.6633,
    eccentricity: 0.048907,
    semi_major_axis: 5.20278,
    tilt: 1.3035,
    node_lon: 100.595,
    theta_0: 196.74,
    magnitude_at_1_au: -9.40,
};

const SATURN: OrbitalElements = OrbitalElements {
    period: 29.310579,
    lon_at_j2010: 172.398316,
    lon_at_perigee: 89.567,
    eccentricity: 0.053853,
    semi_major_axis: 9.51134,
    tilt: 2.4873,
    node_lon: 113.752,
    theta_0: 165.60,
    magnitude_at_1_au: -8.88,
};

const URANUS: OrbitalElements = OrbitalElements {
    period: 84.039492,
    lon_at_j2010: 356.135400,
    lon_at_perigee: 172.884833,
    eccentricity: 0.046321,
    semi_major_axis: 19.21814,
    tilt: 0.773059,
    node_lon: 73.926961,
    theta_0: 65.80,
    magnitude_at_1_au: -7.19,
};

const NEPTUNE: OrbitalElements = OrbitalElements {
    period: 165.84539,
    lon_at_j2010: 326.895127,
    lon_at_perigee: 23.07,
    eccentricity: 0.010483,
    semi_major_axis: 30.1985,
    tilt: 1.7673,
    node_lon: 131.879,
    theta_0: 62.20,
    magnitude_at_1_au: -6.87,
};

/// Position of a planet in the plane of its own orbit
struct OrbitalState {
    /// Distance to the Sun in AU
    radius: f64,
    /// Heliocentric longitude in radians
    lon: f64,
}

impl OrbitalElements {
    fn state_at(&self, days_since_j2010: f64) -> OrbitalState {
        let mean_anomaly = (TAU / TROPICAL_YEAR_DAYS) * days_since_j2010 / self.period
            + (angle::of_deg(self.lon_at_j2010) - angle::of_deg(self.lon_at_perigee));
        let true_anomaly = mean_anomaly + 2.0 * self.eccentricity * mean_anomaly.sin();
        OrbitalState {
            radius: self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
                / (1.0 + self.eccentricity * true_anomaly.cos()),
            lon: true_anomaly + angle::of_deg(self.lon_at_perigee),
        }
    }
}

/// The planets of the solar system, Earth included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetModel {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetModel {
    /// All eight planets, ordered by distance to the Sun
    pub const ALL: [PlanetModel; 8] = [
        PlanetModel::Mercury,
        PlanetModel::Venus,
        PlanetModel::Earth,
        PlanetModel::Mars,
        PlanetModel::Jupiter,
        PlanetModel::Saturn,
        PlanetModel::Uranus,
        PlanetModel::Neptune,
    ];

    /// The seven planets visible from Earth
    pub fn observable() -> impl Iterator<Item = PlanetModel> {
        Self::ALL.into_iter().filter(|model| *model != PlanetModel::Earth)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanetModel::Mercury => "Mercury",
            PlanetModel::Venus => "Venus",
            PlanetModel::Earth => "Earth",
            PlanetModel::Mars => "Mars",
            PlanetModel::Jupiter => "Jupiter",
            PlanetModel::Saturn => "Saturn",
            PlanetModel::Uranus => "Uranus",
            PlanetModel::Neptune => "Neptune",
        }
    }

    /// Whether the orbit lies inside the Earth's
    pub fn is_inferior(&self) -> bool {
        self.elements().semi_major_axis < EARTH.semi_major_axis
    }

    fn elements(&self) -> &'static OrbitalElements {
        match self {
            PlanetModel::Mercury => &MERCURY,
            PlanetModel::Venus => &VENUS,
            PlanetModel::Earth => &EARTH,
            PlanetModel::Mars => &MARS,
            PlanetModel::Jupiter => &JUPITER,
            PlanetModel::Saturn => &SATURN,
            PlanetModel::Uranus => &URANUS,
            PlanetModel::Neptune => &NEPTUNE,
        }
    }
}

impl CelestialObjectModel for PlanetModel {
    type Object = Planet;

    fn at(&self, days_since_j2010: f64, conversion: &EclipticToEquatorialConversion) -> Result<Planet> {
        check_argument(*self != PlanetModel::Earth, || {
            "the Earth cannot be observed from itself".to_string()
        })?;
        let elements = self.elements();
        let earth = EARTH.state_at(days_since_j2010);
        let planet = elements.state_at(days_since_j2010);

        // Heliocentric position projected onto the ecliptic
        let node_lon = angle::of_deg(elements.node_lon);
        let tilt = angle::of_deg(elements.tilt);
        let (sin_from_node, cos_from_node) = (planet.lon - node_lon).sin_cos();
        let helio_lat = (sin_from_node * tilt.sin()).asin();
        let projected_radius = planet.radius * helio_lat.cos();
        let projected_lon = (sin_from_node * tilt.cos()).atan2(cos_from_node) + node_lon;

        let distance = (earth.radius * earth.radius + planet.radius * planet.radius
            - 2.0 * earth.radius * planet.radius * (planet.lon - earth.lon).cos() * helio_lat.cos())
        .sqrt();
        let angular_size = angle::of_arcsec(elements.theta_0) / distance;

        let geo_lon = if self.is_inferior() {
            let delta = earth.lon - projected_lon;
            angle::normalize_positive(
                PI + earth.lon
                    + (projected_radius * delta.sin()).atan2(earth.radius - projected_radius * delta.cos()),
            )
        } else {
            let delta = projected_lon - earth.lon;
            angle::normalize_positive(
                projected_lon
                    + (earth.radius * delta.sin()).atan2(projected_radius - earth.radius * delta.cos()),
            )
        };
        let geo_lat = (projected_radius * helio_lat.tan() * (geo_lon - projected_lon).sin()
            / (earth.radius * (projected_lon - earth.lon).sin()))
        .atan();

        let phase = (1.0 + (geo_lon - planet.lon).cos()) / 2.0;
        let magnitude = elements.magnitude_at_1_au + 5.0 * (planet.radius * distance / phase.sqrt()).log10();

        let ecliptic_pos = EclipticCoordinates::of(geo_lon, geo_lat)?;
        Planet::new(self.name(), conversion.apply(&ecliptic_pos), angular_size, magnitude)
    }
}

impl fmt::Display for PlanetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn november_22_2003() -> EclipticToEquatorialConversion {
        EclipticToEquatorialConversion::new(&Utc.with_ymd_and_hms(2003, 11, 22, 0, 0, 0).unwrap())
    }

    #[rstest]
    #[case(PlanetModel::Mercury, 16.82007456589715, -24.500872462861224)]
    #[case(PlanetModel::Venus, 17.544829143305815, -24.379243552664768)]
    #[case(PlanetModel::Mars, 23.154073269859868, -6.821661022494836)]
    #[case(PlanetModel::Jupiter, 11.187154934709678, 6.356635506685766)]
    #[case(PlanetModel::Saturn, 6.903571135191817, 22.12454058383724)]
    #[case(PlanetModel::Uranus, 22.1069790780422, -12.458022393534943)]
    #[case(PlanetModel::Neptune, 20.879016282452927, -17.56260832996352)]
    fn test_planet_positions(#[case] model: PlanetModel, #[case] ra_hr: f64, #[case] dec_deg: f64) {
        let planet = model.at(-2231.0, &november_22_2003()).unwrap();
        assert_eq!(planet.name(), model.name());
        assert_relative_eq!(planet.equatorial_pos().ra_hr(), ra_hr, epsilon = 1e-8);
        assert_relative_eq!(planet.equatorial_pos().dec_deg(), dec_deg, epsilon = 1e-8);
    }

    #[test]
    fn test_size_and_magnitude() {
        let mercury = PlanetModel::Mercury.at(-2231.0, &november_22_2003()).unwrap();
        assert_relative_eq!(mercury.angular_size(), 2.46106708342995e-05, epsilon = 1e-12);
        assert_relative_eq!(mercury.magnitude(), -1.437715260702872, epsilon = 1e-8);

        let jupiter = PlanetModel::Jupiter.at(-2231.0, &november_22_2003()).unwrap();
        assert_relative_eq!(jupiter.angular_size(), 0.0001702249348317251, epsilon = 1e-12);
        assert_relative_eq!(jupiter.magnitude(), -1.9885659552778367, epsilon = 1e-8);

        let venus = PlanetModel::Venus.at(-2231.0, &november_22_2003()).unwrap();
        assert_relative_eq!(venus.magnitude(), -4.109669900352417, epsilon = 1e-8);
    }

    #[test]
    fn test_earth_is_not_observable() {
        assert!(PlanetModel::Earth.at(0.0, &november_22_2003()).is_err());
        let observable: Vec<_> = PlanetModel::observable().collect();
        assert_eq!(observable.len(), 7);
        assert!(!observable.contains(&PlanetModel::Earth));
    }

    #[test]
    fn test_inferior_planets() {
        let inferior: Vec<_> = PlanetModel::observable().filter(|p| p.is_inferior()).collect();
        assert_eq!(inferior, vec![PlanetModel::Mercury, PlanetModel::Venus]);
    }
}
