//! Sky report CLI
//!
//! Builds the sky seen by one observer at one instant and prints the Sun, the
//! Moon and the planets, how many stars are above the horizon and, when a
//! plane point is given, the object nearest to it.
//!
//! Usage:
//!   cargo run --bin sky_report -- --stars hygdata_v3.csv.gz --asterisms asterisms.txt \
//!       --time 2020-02-17T20:15:00Z --pick-x 0.1 --pick-y -0.2 --radius 0.05

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;

use skyview::catalogs::{
    open_catalogue_file, random_stars, AsterismLoader, HygDatabaseLoader, SatelliteCatalogueBuilder,
    SatelliteDatabaseLoader, StarCatalogueBuilder, UfoCatalogueBuilder, UfoDatabaseLoader,
};
use skyview::celestial::CelestialObject;
use skyview::{
    build_observed_sky, CartesianCoordinates, GeographicCoordinates, HorizontalCoordinates, ObservedSky,
    StereographicProjection,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sky report
#[derive(Parser, Debug)]
#[command(author, version, about = "Prints the sky seen from a place at an instant", long_about = None)]
struct Args {
    /// Instant of the observation (RFC 3339), now by default
    #[arg(long)]
    time: Option<String>,

    /// Observer longitude in degrees, east positive
    #[arg(long, default_value_t = 6.57, allow_negative_numbers = true)]
    lon: f64,

    /// Observer latitude in degrees
    #[arg(long, default_value_t = 46.52, allow_negative_numbers = true)]
    lat: f64,

    /// Azimuth of the projection center in degrees
    #[arg(long, default_value_t = 180.0)]
    center_az: f64,

    /// Altitude of the projection center in degrees
    #[arg(long, default_value_t = 22.0, allow_negative_numbers = true)]
    center_alt: f64,

    /// HYG star database (.csv or .csv.gz)
    #[arg(long)]
    stars: Option<PathBuf>,

    /// Asterism list, one line of Hipparcos ids per asterism
    #[arg(long)]
    asterisms: Option<PathBuf>,

    /// UCS satellite database
    #[arg(long)]
    satellites: Option<PathBuf>,

    /// UFO sightings database
    #[arg(long)]
    ufos: Option<PathBuf>,

    /// Number of random stars to use when no star database is given
    #[arg(long)]
    synthetic: Option<usize>,

    /// Seed of the random stars
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// X of the plane point to pick an object at
    #[arg(long, requires = "pick_y", allow_negative_numbers = true)]
    pick_x: Option<f64>,

    /// Y of the plane point to pick an object at
    #[arg(long, requires = "pick_x", allow_negative_numbers = true)]
    pick_y: Option<f64>,

    /// Maximum plane distance of the picked object
    #[arg(long, default_value_t = 0.05)]
    radius: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct BodyReport {
    name: String,
    info: String,
    ra_hr: f64,
    dec_deg: f64,
    az_deg: f64,
    alt_deg: f64,
    x: f64,
    y: f64,
    magnitude: f64,
}

#[derive(Serialize, Debug)]
struct SkyReport {
    time: String,
    lon_deg: f64,
    lat_deg: f64,
    sun: BodyReport,
    moon: BodyReport,
    moon_phase: f64,
    planets: Vec<BodyReport>,
    stars: usize,
    stars_above_horizon: usize,
    asterisms: usize,
    satellites: usize,
    visible_ufos: Vec<String>,
    picked: Option<String>,
}

fn body_report(sky: &ObservedSky<'_>, object: &dyn CelestialObject, xy: CartesianCoordinates) -> BodyReport {
    let pos = object.equatorial_pos();
    let hor = sky.equatorial_to_horizontal().apply(pos);
    BodyReport {
        name: object.name().to_string(),
        info: object.info(),
        ra_hr: pos.ra_hr(),
        dec_deg: pos.dec_deg(),
        az_deg: hor.az_deg(),
        alt_deg: hor.alt_deg(),
        x: xy.x(),
        y: xy.y(),
        magnitude: object.magnitude(),
    }
}

fn build_report(sky: &ObservedSky<'_>, pick: Option<CartesianCoordinates>, radius: f64) -> SkyReport {
    let planets = sky
        .planets()
        .iter()
        .zip(sky.planet_positions().chunks_exact(2))
        .map(|(planet, xy)| body_report(sky, planet, CartesianCoordinates::of(xy[0], xy[1])))
        .collect();
    let stars_above_horizon = sky
        .stars()
        .iter()
        .filter(|star| sky.equatorial_to_horizontal().apply(star.equatorial_pos()).alt() > 0.0)
        .count();

    SkyReport {
        time: sky.when().to_rfc3339(),
        lon_deg: sky.observer().lon_deg(),
        lat_deg: sky.observer().lat_deg(),
        sun: body_report(sky, sky.sun(), sky.sun_position()),
        moon: body_report(sky, sky.moon(), sky.moon_position()),
        moon_phase: sky.moon().phase(),
        planets,
        stars: sky.stars().len(),
        stars_above_horizon,
        asterisms: sky.asterisms().len(),
        satellites: sky.satellites().len(),
        visible_ufos: sky.visible_ufos().map(|(_, ufo)| ufo.to_string()).collect(),
        picked: pick.and_then(|point| sky.nearest_object_within(&point, radius).map(|object| object.info())),
    }
}

fn print_body(body: &BodyReport) {
    println!(
        "  {:<10} ra={:>8.4}h dec={:>8.4}°  az={:>8.4}° alt={:>8.4}°  (x={:.4}, y={:.4})",
        body.info, body.ra_hr, body.dec_deg, body.az_deg, body.alt_deg, body.x, body.y
    );
}

fn print_report(report: &SkyReport) {
    println!("Sky at {} from lon={:.4}° lat={:.4}°", report.time, report.lon_deg, report.lat_deg);
    println!("-------------------------------------------------------");
    print_body(&report.sun);
    print_body(&report.moon);
    for planet in &report.planets {
        print_body(planet);
    }
    println!("-------------------------------------------------------");
    println!("Stars: {} ({} above the horizon)", report.stars, report.stars_above_horizon);
    println!("Asterisms: {}", report.asterisms);
    println!("Satellites: {}", report.satellites);
    for ufo in &report.visible_ufos {
        println!("UFO: {}", ufo);
    }
    if let Some(picked) = &report.picked {
        println!("Picked: {}", picked);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let when = match &args.time {
        Some(raw) => DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc),
        None => Utc::now(),
    };
    let observer = GeographicCoordinates::of_deg(args.lon, args.lat)?;
    let projection = StereographicProjection::new(HorizontalCoordinates::of_deg(args.center_az, args.center_alt)?);

    let mut stars = StarCatalogueBuilder::new();
    match (&args.stars, args.synthetic) {
        (Some(path), _) => {
            stars.load_from(open_catalogue_file(path)?, &HygDatabaseLoader)?;
        }
        (None, Some(count)) => {
            for star in random_stars(count, args.seed)? {
                stars.add_star(star);
            }
        }
        (None, None) => log::warn!("No star database given, the sky has no stars"),
    }
    if let Some(path) = &args.asterisms {
        stars.load_from(open_catalogue_file(path)?, &AsterismLoader)?;
    }
    let stars = stars.build()?;

    let mut satellites = SatelliteCatalogueBuilder::new();
    if let Some(path) = &args.satellites {
        satellites.load_from(open_catalogue_file(path)?, &SatelliteDatabaseLoader)?;
    }
    let satellites = satellites.build();

    let mut ufos = UfoCatalogueBuilder::new();
    if let Some(path) = &args.ufos {
        ufos.load_from(open_catalogue_file(path)?, &UfoDatabaseLoader)?;
    }
    let ufos = ufos.build();

    let sky = build_observed_sky(when, &observer, projection, &stars, &satellites, &ufos)?;
    let pick = args.pick_x.zip(args.pick_y).map(|(x, y)| CartesianCoordinates::of(x, y));
    let report = build_report(&sky, pick, args.radius);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
