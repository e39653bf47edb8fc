use crate::math::angle;

/// Longitude/latitude pair shared by every spherical coordinate system
///
/// The public coordinate types wrap this pair, validate its ranges at
/// construction and give the two components their system-specific names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SphericalCoordinates {
    lon: f64,
    lat: f64,
}

impl SphericalCoordinates {
    pub(crate) fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub(crate) fn lon(&self) -> f64 {
        self.lon
    }

    pub(crate) fn lon_deg(&self) -> f64 {
        angle::to_deg(self.lon)
    }

    pub(crate) fn lat(&self) -> f64 {
        self.lat
    }

    pub(crate) fn lat_deg(&self) -> f64 {
        angle::to_deg(self.lat)
    }
}
