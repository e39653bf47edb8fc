//! # Plane Coordinates
//!
//! The stereographic projection maps the celestial sphere onto a plane whose
//! origin is the projection center. `CartesianCoordinates` is a point of that
//! plane; it converts to and from `nalgebra::Point2` so plane geometry
//! (distances, translations) can reuse nalgebra.
//!
//! ```rust
//! use skyview::coordinates::CartesianCoordinates;
//!
//! let origin = CartesianCoordinates::of(0.0, 0.0);
//! let p = CartesianCoordinates::of(3.0, 4.0);
//! assert_eq!(origin.distance_to(&p), 5.0);
//! ```

use std::fmt;

use nalgebra::{distance, Point2};

/// A point of the projection plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianCoordinates {
    x: f64,
    y: f64,
}

impl CartesianCoordinates {
    /// Creates the point `(x, y)`
    pub fn of(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Abscissa
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Ordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `that`
    pub fn distance_to(&self, that: &CartesianCoordinates) -> f64 {
        distance(&self.to_point(), &that.to_point())
    }

    /// This point as a nalgebra point
    pub fn to_point(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl From<Point2<f64>> for CartesianCoordinates {
    fn from(point: Point2<f64>) -> Self {
        Self::of(point.x, point.y)
    }
}

impl fmt::Display for CartesianCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={:.4}, y={:.4})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = CartesianCoordinates::of(-1.0, 2.0);
        let b = CartesianCoordinates::of(2.0, -2.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
        assert_relative_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_point_conversion() {
        let p = CartesianCoordinates::of(0.25, -0.5);
        let point = p.to_point();
        assert_eq!(point.x, 0.25);
        assert_eq!(point.y, -0.5);
        assert_eq!(CartesianCoordinates::from(point), p);
        assert_eq!(p.to_string(), "(x=0.2500, y=-0.5000)");
    }
}
