//! Man-made and unidentified point objects
//!
//! Neither kind has a magnitude or a size; they are drawn as fixed markers
//! at their equatorial position.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::coordinates::EquatorialCoordinates;
use crate::{check_argument, Result, SkyError};

/// A satellite on a geostationary orbit
#[derive(Debug, Clone, PartialEq)]
pub struct ArtificialSatellite {
    name: String,
    equatorial_pos: EquatorialCoordinates,
}

impl ArtificialSatellite {
    pub fn new(name: impl Into<String>, equatorial_pos: EquatorialCoordinates) -> Self {
        Self {
            name: name.into(),
            equatorial_pos,
        }
    }

    /// Operator or owner of the satellite
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.equatorial_pos
    }
}

impl fmt::Display for ArtificialSatellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A reported sighting of an unidentified flying object
#[derive(Debug, Clone, PartialEq)]
pub struct Ufo {
    info: String,
    appearance: DateTime<Utc>,
    duration_s: f64,
    disappearance: DateTime<Utc>,
    equatorial_pos: EquatorialCoordinates,
}

impl Ufo {
    /// Creates a sighting lasting `duration_s` seconds from `appearance`
    ///
    /// # Errors
    ///
    /// Fails when the duration is negative, not finite, or ends the sighting
    /// past the last representable instant.
    pub fn new(
        info: impl Into<String>,
        appearance: DateTime<Utc>,
        duration_s: f64,
        equatorial_pos: EquatorialCoordinates,
    ) -> Result<Self> {
        check_argument(duration_s.is_finite() && duration_s >= 0.0, || {
            format!("sighting duration must be finite and non-negative, got {}", duration_s)
        })?;
        let disappearance = TimeDelta::try_seconds(duration_s as i64)
            .and_then(|duration| appearance.checked_add_signed(duration))
            .ok_or_else(|| {
                SkyError::InvalidArgument(format!(
                    "sighting of {} s from {} ends out of range",
                    duration_s,
                    appearance.to_rfc3339()
                ))
            })?;
        Ok(Self {
            info: info.into(),
            appearance,
            duration_s,
            disappearance,
            equatorial_pos,
        })
    }

    /// Where the sighting was reported
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn appearance(&self) -> DateTime<Utc> {
        self.appearance
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration_s
    }

    /// End of the sighting, truncated to the second
    pub fn disappearance(&self) -> DateTime<Utc> {
        self.disappearance
    }

    /// Whether the object was reported at `when`, both ends included
    pub fn is_visible_at(&self, when: &DateTime<Utc>) -> bool {
        self.appearance <= *when && *when <= self.disappearance()
    }

    pub fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.equatorial_pos
    }
}

impl fmt::Display for Ufo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.info, self.appearance.to_rfc3339())
    }
}
