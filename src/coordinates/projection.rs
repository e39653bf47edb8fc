//! # Stereographic Projection
//!
//! Maps the observer's sky onto a plane tangent to the celestial sphere at a
//! chosen horizontal "center". The projection is conformal, so circles on the
//! sphere (parallels of altitude, the disks of the Sun and Moon) stay circles
//! on the plane.
//!
//! Two configurations are degenerate and are left to IEEE arithmetic rather
//! than reported as errors:
//!
//! - the point diametrically opposite the center projects to infinity;
//! - the parallel at altitude `-center.alt()` is a straight line, so its
//!   circle center and radius are infinite (or `NaN`).
//!
//! Callers doing layout must skip non-finite results.
//!
//! ```rust
//! use skyview::coordinates::{HorizontalCoordinates, StereographicProjection};
//!
//! let center = HorizontalCoordinates::of_deg(180.0, 45.0).unwrap();
//! let projection = StereographicProjection::new(center);
//!
//! let origin = projection.apply(&center);
//! assert!(origin.x().abs() < 1e-12 && origin.y().abs() < 1e-12);
//! ```

use std::fmt;

use super::{CartesianCoordinates, HorizontalCoordinates};
use crate::math::angle;

/// Stereographic projection centered on a horizontal coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    cos_center_lat: f64,
    sin_center_lat: f64,
}

impl StereographicProjection {
    pub fn new(center: HorizontalCoordinates) -> Self {
        Self {
            center,
            cos_center_lat: center.alt().cos(),
            sin_center_lat: center.alt().sin(),
        }
    }

    /// The point of the sky projected to the origin
    pub fn center(&self) -> HorizontalCoordinates {
        self.center
    }

    /// Projects `azAlt` onto the plane
    pub fn apply(&self, az_alt: &HorizontalCoordinates) -> CartesianCoordinates {
        let delta_lon = az_alt.az() - self.center.az();
        let (sin_delta_lon, cos_delta_lon) = delta_lon.sin_cos();
        let (sin_lat, cos_lat) = az_alt.alt().sin_cos();

        let d = 1.0
            / (1.0 + sin_lat * self.sin_center_lat + cos_lat * self.cos_center_lat * cos_delta_lon);

        CartesianCoordinates::of(
            d * cos_lat * sin_delta_lon,
            d * (sin_lat * self.cos_center_lat - cos_lat * self.sin_center_lat * cos_delta_lon),
        )
    }

    /// Maps a point of the plane back onto the sky
    ///
    /// The origin maps to the center exactly.
    pub fn inverse_apply(&self, xy: &CartesianCoordinates) -> HorizontalCoordinates {
        let (x, y) = (xy.x(), xy.y());
        let rho = x.hypot(y);
        if rho == 0.0 {
            return self.center;
        }

        let rho_sq = rho * rho;
        let sin_c = 2.0 * rho / (rho_sq + 1.0);
        let cos_c = (1.0 - rho_sq) / (rho_sq + 1.0);

        let lon = (x * sin_c).atan2(rho * self.cos_center_lat * cos_c - y * self.sin_center_lat * sin_c)
            + self.center.az();
        let sin_lat = cos_c * self.sin_center_lat + y * sin_c * self.cos_center_lat / rho;

        HorizontalCoordinates::from_normalized(
            angle::normalize_positive(lon),
            sin_lat.clamp(-1.0, 1.0).asin(),
        )
    }

    /// Diameter on the plane of a disk of angular diameter `rad` centered on
    /// the projection center
    pub fn apply_to_angle(&self, rad: f64) -> f64 {
        2.0 * (rad / 4.0).tan()
    }

    /// Center of the circle the parallel through `hor` projects to
    pub fn circle_center_for_parallel(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        CartesianCoordinates::of(
            0.0,
            self.cos_center_lat / (self.sin_center_lat + hor.alt().sin()),
        )
    }

    /// Radius of the circle the parallel through `hor` projects to
    pub fn circle_radius_for_parallel(&self, hor: &HorizontalCoordinates) -> f64 {
        hor.alt().cos() / (hor.alt().sin() + self.sin_center_lat)
    }
}

impl fmt::Display for StereographicProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StereographicProjection centered at {}", self.center)
    }
}
