use std::fmt;

use lazy_static::lazy_static;

use super::{CelestialBody, CelestialObject};
use crate::coordinates::EquatorialCoordinates;
use crate::math::{ClosedInterval, Interval};
use crate::{check_argument, Result};

lazy_static! {
    static ref COLOR_INDICES: ClosedInterval =
        ClosedInterval::of(-0.5, 5.5).expect("[-0.5, 5.5] is a valid interval");
}

/// A catalogued star
///
/// Stars have no measurable angular size; they are told apart by value, so
/// two stars with the same id, name, position, magnitude and colour index
/// are the same star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    body: CelestialBody,
    hipparcos_id: i32,
    color_index: f64,
}

impl Star {
    /// Creates a star
    ///
    /// # Errors
    ///
    /// Fails when `hipparcos_id` is negative or `color_index` is outside
    /// `[-0.5, 5.5]`.
    pub fn new(
        hipparcos_id: i32,
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        magnitude: f64,
        color_index: f64,
    ) -> Result<Self> {
        check_argument(hipparcos_id >= 0, || {
            format!("Hipparcos id must be non-negative, got {}", hipparcos_id)
        })?;
        let color_index = COLOR_INDICES.check(color_index, "color index")?;
        Ok(Self {
            body: CelestialBody::new(name, equatorial_pos, 0.0, magnitude)?,
            hipparcos_id,
            color_index,
        })
    }

    /// Hipparcos catalogue number, 0 when unknown
    pub fn hipparcos_id(&self) -> i32 {
        self.hipparcos_id
    }

    /// B-V colour index
    pub fn color_index(&self) -> f64 {
        self.color_index
    }

    /// Black-body temperature in kelvins, rounded down
    pub fn color_temperature(&self) -> i32 {
        let x = 0.92 * self.color_index;
        (4600.0 * (1.0 / (x + 1.7) + 1.0 / (x + 0.62))).floor() as i32
    }
}

impl CelestialObject for Star {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

/// A named group of stars drawn as a connected line
#[derive(Debug, Clone, PartialEq)]
pub struct Asterism {
    stars: Vec<Star>,
}

impl Asterism {
    /// Creates an asterism, failing when `stars` is empty
    pub fn new(stars: Vec<Star>) -> Result<Self> {
        check_argument(!stars.is_empty(), || "an asterism needs at least one star".to_string())?;
        Ok(Self { stars })
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::round_to_nearest_hundred;
    use rstest::rstest;

    fn star(color_index: f64) -> Result<Star> {
        Star::new(32349, "Sirius", EquatorialCoordinates::of(1.77, -0.29)?, -1.44, color_index)
    }

    #[rstest]
    #[case(-0.03, 10515)]
    #[case(0.0, 10125)]
    #[case(1.5, 3793)]
    fn test_color_temperature(#[case] color_index: f64, #[case] kelvin: i32) {
        assert_eq!(star(color_index).unwrap().color_temperature(), kelvin);
    }

    #[test]
    fn test_color_temperature_rounds_to_3800() {
        let kelvin = star(1.5).unwrap().color_temperature();
        assert_eq!(round_to_nearest_hundred(kelvin as f64), 3800);
    }

    #[test]
    fn test_star_validation() {
        assert!(star(-0.5).is_ok());
        assert!(star(5.5).is_ok());
        assert!(star(-0.51).is_err());
        assert!(star(5.6).is_err());

        let pos = EquatorialCoordinates::of(0.0, 0.0).unwrap();
        assert!(Star::new(-1, "nobody", pos, 0.0, 0.0).is_err());
        assert!(Star::new(0, "nobody", pos, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_star_has_no_size() {
        let sirius = star(0.0).unwrap();
        assert_eq!(sirius.angular_size(), 0.0);
        assert_eq!(sirius.hipparcos_id(), 32349);
        assert_eq!(sirius.to_string(), "Sirius");
    }

    #[test]
    fn test_asterism_is_not_empty() {
        assert!(Asterism::new(Vec::new()).is_err());
        let asterism = Asterism::new(vec![star(0.0).unwrap()]).unwrap();
        assert_eq!(asterism.stars().len(), 1);
    }
}
