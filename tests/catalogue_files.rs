//! Loading catalogues from plain and gzipped files

use std::fs::File;
use std::io::Write;

use skyview::catalogs::{open_catalogue_file, HygDatabaseLoader, StarCatalogueBuilder};
use skyview::CelestialObject;

const HYG: &str = "id,hip,hd,hr,gl,bf,proper,ra,dec,dist,pmra,pmdec,rv,mag,absmag,spect,ci,x,y,z,vx,vy,vz,rarad,decrad,pmrarad,pmdecrad,bayer,flam,con,comp,comp_primary,base,lum,var,var_min,var_max
24378,24436,34085,1713,,19Bet Ori,Rigel,5.242298,-8.20164,264.5503,1.87,-0.56,20.7,0.180,-6.933,B8Ia...,-0.030,-1.154,-2.7,-0.325,0.00001,-0.00000245,0.00000103,1.3724303693276385,-0.143145630755865,0.000000009,-0.000000002,Bet,19,Ori,1,24378,,1,,,
2,1,224700,,,,,0.000060,1.089009,219.7802,-5.20,-1.88,0.0,9.100,2.390,F5,0.482,219.740502,0.003449,4.177065,0.00000400,-0.00000575,-0.00000169,0.000015693409775347,0.01900678824815125,-0.000000025,-0.000000009,,,Psc,1,2,,,,,
";

fn load_names(path: &std::path::Path) -> Vec<String> {
    let mut builder = StarCatalogueBuilder::new();
    builder
        .load_from(open_catalogue_file(path).unwrap(), &HygDatabaseLoader)
        .unwrap();
    builder.stars().iter().map(|s| s.name().to_string()).collect()
}

#[test]
fn test_plain_and_gzipped_files_agree() {
    let dir = tempfile::tempdir().unwrap();

    let plain = dir.path().join("hyg.csv");
    File::create(&plain).unwrap().write_all(HYG.as_bytes()).unwrap();

    let gzipped = dir.path().join("hyg.csv.gz");
    let mut encoder = flate2::write::GzEncoder::new(File::create(&gzipped).unwrap(), flate2::Compression::default());
    encoder.write_all(HYG.as_bytes()).unwrap();
    encoder.finish().unwrap();

    assert_eq!(load_names(&plain), vec!["Rigel", "? Psc"]);
    assert_eq!(load_names(&plain), load_names(&gzipped));
}
