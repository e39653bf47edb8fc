use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skyview::catalogs::{random_stars, SatelliteCatalogue, StarCatalogue, UfoCatalogue};
use skyview::{
    CartesianCoordinates, GeographicCoordinates, HorizontalCoordinates, ObservedSky, StereographicProjection,
};

fn make_catalogue(count: usize) -> StarCatalogue {
    let stars = random_stars(count, 42).expect("default synthetic configuration is valid");
    StarCatalogue::new(stars, Vec::new()).expect("no asterisms to resolve")
}

fn bench_build_observed_sky(c: &mut Criterion) {
    let when = Utc.with_ymd_and_hms(2020, 2, 17, 20, 15, 0).unwrap();
    let observer = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
    let projection = StereographicProjection::new(HorizontalCoordinates::of_deg(180.0, 22.0).unwrap());
    let satellites = SatelliteCatalogue::default();
    let ufos = UfoCatalogue::default();

    let mut group = c.benchmark_group("build_observed_sky");
    for count in [1_000, 5_000] {
        let stars = make_catalogue(count);
        group.bench_function(format!("{}_stars", count), |b| {
            b.iter(|| {
                ObservedSky::new(
                    black_box(when),
                    black_box(&observer),
                    black_box(projection),
                    &stars,
                    &satellites,
                    &ufos,
                )
            })
        });
    }
    group.finish();
}

fn bench_nearest_object(c: &mut Criterion) {
    let when = Utc.with_ymd_and_hms(2020, 2, 17, 20, 15, 0).unwrap();
    let observer = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
    let projection = StereographicProjection::new(HorizontalCoordinates::of_deg(180.0, 22.0).unwrap());
    let stars = make_catalogue(5_000);
    let satellites = SatelliteCatalogue::default();
    let ufos = UfoCatalogue::default();
    let sky = ObservedSky::new(when, &observer, projection, &stars, &satellites, &ufos).unwrap();
    let point = CartesianCoordinates::of(0.1, -0.2);

    c.bench_function("nearest_object_within_5000_stars", |b| {
        b.iter(|| sky.nearest_object_within(black_box(&point), black_box(0.05)))
    });
}

criterion_group!(benches, bench_build_observed_sky, bench_nearest_object);
criterion_main!(benches);
