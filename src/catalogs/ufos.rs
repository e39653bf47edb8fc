//! UFO sightings from the NUFORC report database

use std::io::BufRead;

use chrono::{DateTime, NaiveDate, Utc};

use super::{column, parse_value, CatalogueLoader};
use crate::celestial::Ufo;
use crate::coordinates::EquatorialCoordinates;
use crate::math::angle;
use crate::{Result, SkyError};

const DATE_TIME: usize = 0;
const CITY: usize = 1;
const COUNTRY: usize = 3;
const DURATION: usize = 5;
const LATITUDE: usize = 9;
const LONGITUDE: usize = 10;

/// An immutable list of UFO sightings
#[derive(Debug, Clone, Default)]
pub struct UfoCatalogue {
    ufos: Vec<Ufo>,
}

impl UfoCatalogue {
    pub fn new(ufos: Vec<Ufo>) -> Self {
        Self { ufos }
    }

    pub fn ufos(&self) -> &[Ufo] {
        &self.ufos
    }
}

/// Accumulates sightings before freezing them into a [`UfoCatalogue`]
#[derive(Debug, Clone, Default)]
pub struct UfoCatalogueBuilder {
    ufos: Vec<Ufo>,
}

impl UfoCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ufo(&mut self, ufo: Ufo) -> &mut Self {
        self.ufos.push(ufo);
        self
    }

    pub fn ufos(&self) -> &[Ufo] {
        &self.ufos
    }

    pub fn load_from<R, L>(&mut self, reader: R, loader: &L) -> Result<&mut Self>
    where
        R: BufRead,
        L: CatalogueLoader<Self>,
    {
        loader.load(reader, self)?;
        Ok(self)
    }

    pub fn build(self) -> UfoCatalogue {
        UfoCatalogue::new(self.ufos)
    }
}

/// Reads UFO sightings
///
/// Dates look like `10/10/1949 20:30` (month first, UTC, `24:00` meaning
/// midnight of the same day). Latitude and longitude become declination and
/// right ascension. The reports are free text and often malformed, so rows
/// that cannot be read are skipped with a warning, as are rows without
/// coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct UfoDatabaseLoader;

impl UfoDatabaseLoader {
    fn parse_row(fields: &[&str], number: usize) -> Result<Option<Ufo>> {
        let lat = column(fields, LATITUDE, number)?.trim();
        let lon = column(fields, LONGITUDE, number)?.trim();
        if lat.is_empty() || lon.is_empty() {
            return Ok(None);
        }

        let appearance = parse_sighting_date(column(fields, DATE_TIME, number)?, number)?;
        let info = format!(
            "{}, {}",
            column(fields, CITY, number)?.trim(),
            column(fields, COUNTRY, number)?.trim()
        );
        let duration_s: f64 = parse_value(column(fields, DURATION, number)?, number)?;
        let lat_deg: f64 = parse_value(lat, number)?;
        let lon_deg: f64 = parse_value(lon, number)?;

        let pos = EquatorialCoordinates::of(angle::normalize_positive(angle::of_deg(lon_deg)), angle::of_deg(lat_deg))?;
        Ok(Some(Ufo::new(info, appearance, duration_s, pos)?))
    }
}

impl CatalogueLoader<UfoCatalogueBuilder> for UfoDatabaseLoader {
    fn load<R: BufRead>(&self, reader: R, builder: &mut UfoCatalogueBuilder) -> Result<()> {
        let (mut loaded, mut skipped) = (0, 0);
        for (index, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let number = index + 1;
            let fields: Vec<&str> = line.split(',').collect();

            match Self::parse_row(&fields, number) {
                Ok(Some(ufo)) => {
                    builder.add_ufo(ufo);
                    loaded += 1;
                }
                Ok(None) => skipped += 1,
                Err(e) => {
                    log::warn!("Skipping sighting on line {}: {}", number, e);
                    skipped += 1;
                }
            }
        }
        log::info!("Loaded {} UFO sightings ({} skipped)", loaded, skipped);
        Ok(())
    }
}

/// Parses `M/D/YYYY H:MM` as a UTC instant
fn parse_sighting_date(raw: &str, line: usize) -> Result<DateTime<Utc>> {
    let malformed = || SkyError::Parse {
        line,
        message: format!("malformed sighting date '{}'", raw),
    };

    let (date, time) = raw.trim().split_once(' ').ok_or_else(malformed)?;
    let mut date_parts = date.split('/');
    let mut next_date_part = || -> Result<u32> { parse_value(date_parts.next().ok_or_else(malformed)?, line) };
    let month = next_date_part()?;
    let day = next_date_part()?;
    let year = next_date_part()? as i32;

    let (hour, minute) = time.trim().split_once(':').ok_or_else(malformed)?;
    let hour = match parse_value::<u32>(hour, line)? {
        24 => 0,
        hour => hour,
    };
    let minute = parse_value::<u32>(minute, line)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    const HEADER: &str = "datetime,city,state,country,shape,duration (seconds),duration (hours/min),comments,date posted,latitude,longitude";

    #[rstest]
    #[case("10/10/1949 20:30", 1949, 10, 10, 20, 30)]
    #[case("1/2/2004 24:00", 2004, 1, 2, 0, 0)]
    #[case("12/31/1999 7:05", 1999, 12, 31, 7, 5)]
    fn test_parse_sighting_date(
        #[case] raw: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] hour: u32,
        #[case] minute: u32,
    ) {
        let expected = Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap();
        assert_eq!(parse_sighting_date(raw, 1).unwrap(), expected);
    }

    #[rstest]
    #[case("10/10/1949")]
    #[case("13/10/1949 20:30")]
    #[case("10/10 20:30")]
    #[case("10/10/1949 20h30")]
    fn test_rejects_malformed_dates(#[case] raw: &str) {
        assert!(matches!(parse_sighting_date(raw, 4), Err(SkyError::Parse { line: 4, .. })));
    }

    #[test]
    fn test_load_sightings() {
        let text = format!(
            "{}\n{}\n{}\n{}\n",
            HEADER,
            "10/10/1949 20:30,san marcos,tx,us,cylinder,2700,45 minutes,bright light,4/27/2004,29.8830556,-97.9411111",
            "10/10/1956 21:00,edna,tx,us,circle,20,1/2 hour,no coordinates,1/17/2004,,",
            "garbage line",
        );
        let mut builder = UfoCatalogueBuilder::new();
        builder.load_from(text.as_bytes(), &UfoDatabaseLoader).unwrap();
        let catalogue = builder.build();

        assert_eq!(catalogue.ufos().len(), 1);
        let ufo = &catalogue.ufos()[0];
        assert_eq!(ufo.info(), "san marcos, us");
        assert_eq!(ufo.duration(), 2700.0);
        assert_eq!(ufo.appearance(), Utc.with_ymd_and_hms(1949, 10, 10, 20, 30, 0).unwrap());
        assert!((ufo.equatorial_pos().ra_deg() - (360.0 - 97.9411111)).abs() < 1e-9);
        assert!((ufo.equatorial_pos().dec_deg() - 29.8830556).abs() < 1e-9);
    }

    #[test]
    fn test_skips_endless_sightings() {
        let text = format!(
            "{}\n{}\n{}\n{}\n",
            HEADER,
            "10/10/1949 20:30,san marcos,tx,us,cylinder,1e20,forever,bright light,4/27/2004,29.88,-97.94",
            "10/10/1949 20:30,san marcos,tx,us,cylinder,inf,forever,bright light,4/27/2004,29.88,-97.94",
            "10/10/1949 20:30,lackland afb,tx,us,light,7200,1-2 hrs,red light,12/16/2005,29.38,-98.58",
        );
        let mut builder = UfoCatalogueBuilder::new();
        builder.load_from(text.as_bytes(), &UfoDatabaseLoader).unwrap();
        let catalogue = builder.build();

        assert_eq!(catalogue.ufos().len(), 1);
        let ufo = &catalogue.ufos()[0];
        assert_eq!(ufo.info(), "lackland afb, us");
        assert!(ufo.is_visible_at(&Utc.with_ymd_and_hms(1949, 10, 10, 22, 30, 0).unwrap()));
    }
}
