//! The sky seen by an observer at a given instant
//!
//! An [`ObservedSky`] is an immutable snapshot: the solar system models are
//! evaluated once, every object is projected onto the plane once, and the
//! projected positions are kept in flat buffers where `buffer[2 * i]` and
//! `buffer[2 * i + 1]` are the x and y of object `i` of the matching list.
//! Any change of instant, observer or projection calls for a new snapshot.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::catalogs::{SatelliteCatalogue, StarCatalogue, UfoCatalogue};
use crate::celestial::{
    ArtificialSatellite, Asterism, CelestialObject, CelestialObjectModel, Moon, MoonModel, Planet, PlanetModel,
    Star, Sun, SunModel, Ufo,
};
use crate::coordinates::{
    CartesianCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates, EquatorialToHorizontalConversion,
    GeographicCoordinates, StereographicProjection,
};
use crate::time::Epoch;
use crate::Result;

/// An object returned by [`ObservedSky::nearest_object_within`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkyObject<'s> {
    Sun(&'s Sun),
    Moon(&'s Moon),
    Star(&'s Star),
    Planet(&'s Planet),
}

impl<'s> SkyObject<'s> {
    pub fn as_celestial(&self) -> &'s dyn CelestialObject {
        match *self {
            SkyObject::Sun(sun) => sun,
            SkyObject::Moon(moon) => moon,
            SkyObject::Star(star) => star,
            SkyObject::Planet(planet) => planet,
        }
    }

    pub fn name(&self) -> &'s str {
        self.as_celestial().name()
    }

    pub fn info(&self) -> String {
        self.as_celestial().info()
    }
}

impl fmt::Display for SkyObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

/// Sun, Moon, planets and catalogue objects projected for one observer
#[derive(Debug, Clone)]
pub struct ObservedSky<'a> {
    when: DateTime<Utc>,
    observer: GeographicCoordinates,
    projection: StereographicProjection,
    ecliptic_to_equatorial: EclipticToEquatorialConversion,
    equatorial_to_horizontal: EquatorialToHorizontalConversion,

    sun: Sun,
    sun_position: CartesianCoordinates,
    moon: Moon,
    moon_position: CartesianCoordinates,
    planets: Vec<Planet>,
    planet_positions: Vec<f64>,

    star_catalogue: &'a StarCatalogue,
    star_positions: Vec<f64>,
    satellites: &'a [ArtificialSatellite],
    satellite_positions: Vec<f64>,
    ufos: &'a [Ufo],
    ufo_positions: Vec<f64>,
}

impl<'a> ObservedSky<'a> {
    /// Evaluates and projects the whole sky
    ///
    /// The catalogues are borrowed, not copied; the snapshot only owns the
    /// solar system objects and the projected positions.
    pub fn new(
        when: DateTime<Utc>,
        observer: &GeographicCoordinates,
        projection: StereographicProjection,
        stars: &'a StarCatalogue,
        satellites: &'a SatelliteCatalogue,
        ufos: &'a UfoCatalogue,
    ) -> Result<Self> {
        let days = Epoch::J2010.days_until(&when);
        let ecliptic_to_equatorial = EclipticToEquatorialConversion::new(&when);
        let equatorial_to_horizontal = EquatorialToHorizontalConversion::new(&when, observer);
        let project = |pos: &EquatorialCoordinates| projection.apply(&equatorial_to_horizontal.apply(pos));

        let sun = SunModel.at(days, &ecliptic_to_equatorial)?;
        let moon = MoonModel.at(days, &ecliptic_to_equatorial)?;
        let planets = PlanetModel::observable()
            .map(|model| model.at(days, &ecliptic_to_equatorial))
            .collect::<Result<Vec<_>>>()?;

        let sun_position = project(sun.equatorial_pos());
        let moon_position = project(moon.equatorial_pos());
        let planet_positions = flatten(planets.iter().map(|p| project(p.equatorial_pos())), planets.len());
        let star_positions = flatten(
            stars.stars().iter().map(|s| project(s.equatorial_pos())),
            stars.stars().len(),
        );
        let satellite_positions = flatten(
            satellites.satellites().iter().map(|s| project(s.equatorial_pos())),
            satellites.satellites().len(),
        );
        let ufo_positions = flatten(ufos.ufos().iter().map(|u| project(u.equatorial_pos())), ufos.ufos().len());

        log::debug!(
            "Observed sky at {} from {}: {} planets, {} stars, {} satellites, {} UFOs",
            when.to_rfc3339(),
            observer,
            planets.len(),
            stars.stars().len(),
            satellites.satellites().len(),
            ufos.ufos().len()
        );

        Ok(Self {
            when,
            observer: *observer,
            projection,
            ecliptic_to_equatorial,
            equatorial_to_horizontal,
            sun,
            sun_position,
            moon,
            moon_position,
            planets,
            planet_positions,
            star_catalogue: stars,
            star_positions,
            satellites: satellites.satellites(),
            satellite_positions,
            ufos: ufos.ufos(),
            ufo_positions,
        })
    }

    pub fn when(&self) -> DateTime<Utc> {
        self.when
    }

    pub fn observer(&self) -> &GeographicCoordinates {
        &self.observer
    }

    pub fn projection(&self) -> &StereographicProjection {
        &self.projection
    }

    pub fn ecliptic_to_equatorial(&self) -> &EclipticToEquatorialConversion {
        &self.ecliptic_to_equatorial
    }

    pub fn equatorial_to_horizontal(&self) -> &EquatorialToHorizontalConversion {
        &self.equatorial_to_horizontal
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn sun_position(&self) -> CartesianCoordinates {
        self.sun_position
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn moon_position(&self) -> CartesianCoordinates {
        self.moon_position
    }

    /// The seven planets other than the Earth, ordered by distance to the Sun
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet_positions(&self) -> &[f64] {
        &self.planet_positions
    }

    pub fn stars(&self) -> &'a [Star] {
        self.star_catalogue.stars()
    }

    pub fn star_positions(&self) -> &[f64] {
        &self.star_positions
    }

    pub fn asterisms(&self) -> &'a [Asterism] {
        self.star_catalogue.asterisms()
    }

    /// Indices into [`stars`](Self::stars) of the stars of `asterism`
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&'a [usize]> {
        self.star_catalogue.asterism_indices(asterism)
    }

    pub fn satellites(&self) -> &'a [ArtificialSatellite] {
        self.satellites
    }

    pub fn satellite_positions(&self) -> &[f64] {
        &self.satellite_positions
    }

    pub fn ufos(&self) -> &'a [Ufo] {
        self.ufos
    }

    pub fn ufo_positions(&self) -> &[f64] {
        &self.ufo_positions
    }

    /// The UFOs visible at this instant, with their index in
    /// [`ufos`](Self::ufos) and [`ufo_positions`](Self::ufo_positions)
    pub fn visible_ufos(&self) -> impl Iterator<Item = (usize, &'a Ufo)> + '_ {
        self.ufos
            .iter()
            .enumerate()
            .filter(move |(_, ufo)| ufo.is_visible_at(&self.when))
    }

    /// The object closest to `point` on the plane, provided it lies strictly
    /// closer than `max_distance`
    ///
    /// Sun, Moon, stars and planets are searched in that order and the first
    /// of equally distant objects wins. Satellites and UFOs are not pickable.
    pub fn nearest_object_within(&self, point: &CartesianCoordinates, max_distance: f64) -> Option<SkyObject<'_>> {
        let mut best: Option<SkyObject<'_>> = None;
        let mut best_distance = max_distance;

        let sun_distance = point.distance_to(&self.sun_position);
        if sun_distance < best_distance {
            best = Some(SkyObject::Sun(&self.sun));
            best_distance = sun_distance;
        }
        let moon_distance = point.distance_to(&self.moon_position);
        if moon_distance < best_distance {
            best = Some(SkyObject::Moon(&self.moon));
            best_distance = moon_distance;
        }
        if let Some((i, distance)) = closest_index(&self.star_positions, point, best_distance) {
            best = Some(SkyObject::Star(&self.stars()[i]));
            best_distance = distance;
        }
        if let Some((i, _)) = closest_index(&self.planet_positions, point, best_distance) {
            best = Some(SkyObject::Planet(&self.planets[i]));
        }
        best
    }
}

/// Builds the sky seen from `observer` at `when`
///
/// Meant to be called again whenever one of the inputs changes.
pub fn build_observed_sky<'a>(
    when: DateTime<Utc>,
    observer: &GeographicCoordinates,
    projection: StereographicProjection,
    stars: &'a StarCatalogue,
    satellites: &'a SatelliteCatalogue,
    ufos: &'a UfoCatalogue,
) -> Result<ObservedSky<'a>> {
    ObservedSky::new(when, observer, projection, stars, satellites, ufos)
}

fn flatten(points: impl Iterator<Item = CartesianCoordinates>, count: usize) -> Vec<f64> {
    let mut buffer = Vec::with_capacity(2 * count);
    for point in points {
        buffer.push(point.x());
        buffer.push(point.y());
    }
    buffer
}

/// Index and distance of the first point of `buffer` closest to `point`,
/// if strictly closer than `max_distance`
fn closest_index(buffer: &[f64], point: &CartesianCoordinates, max_distance: f64) -> Option<(usize, f64)> {
    let mut best = None;
    let mut best_distance = max_distance;
    for (i, xy) in buffer.chunks_exact(2).enumerate() {
        let distance = point.distance_to(&CartesianCoordinates::of(xy[0], xy[1]));
        if distance < best_distance {
            best = Some((i, distance));
            best_distance = distance;
        }
    }
    best
}
