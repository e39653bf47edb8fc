//! Random star catalogues for demos and benchmarks
//!
//! Stars are spread uniformly over the celestial sphere and their magnitudes
//! follow the usual star-count law: each magnitude step holds `log_base`
//! times more stars than the previous one.

use std::f64::consts::TAU;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::celestial::Star;
use crate::coordinates::EquatorialCoordinates;
use crate::{check_argument, Result};

/// Configuration of a synthetic star catalogue
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticCatalogConfig {
    /// Number of stars to generate
    pub count: usize,
    /// Seed of the random generator, the same seed gives the same stars
    pub seed: u64,
    /// Brightest magnitude
    pub min_magnitude: f64,
    /// Dimmest magnitude
    pub max_magnitude: f64,
    /// Growth of the star count per magnitude (100^0.4 for the real sky)
    pub log_base: f64,
}

impl Default for SyntheticCatalogConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            seed: 42,
            min_magnitude: -1.0,
            max_magnitude: 6.5,
            log_base: 2.5,
        }
    }
}

impl SyntheticCatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_magnitude_range(mut self, min: f64, max: f64) -> Self {
        self.min_magnitude = min;
        self.max_magnitude = max;
        self
    }

    pub fn with_magnitude_base(mut self, log_base: f64) -> Self {
        self.log_base = log_base;
        self
    }

    /// Draws the stars
    ///
    /// Stars get Hipparcos ids `1..=count` and names `SYN-<id>`.
    ///
    /// # Errors
    ///
    /// Fails when the magnitude range is empty or `log_base` is not greater
    /// than 1.
    pub fn generate(&self) -> Result<Vec<Star>> {
        check_argument(self.min_magnitude < self.max_magnitude, || {
            format!(
                "empty magnitude range [{}, {}]",
                self.min_magnitude, self.max_magnitude
            )
        })?;
        check_argument(self.log_base > 1.0, || {
            format!("magnitude base must exceed 1, got {}", self.log_base)
        })?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let ra = Uniform::from(0.0..TAU);
        let z = Uniform::new_inclusive(-1.0, 1.0);
        let color_index = Uniform::from(-0.3..2.0);

        let mut stars = Vec::with_capacity(self.count);
        for id in 1..=self.count {
            let pos = EquatorialCoordinates::of(ra.sample(&mut rng), f64::asin(z.sample(&mut rng)))?;
            let magnitude = self.sample_magnitude(&mut rng);
            stars.push(Star::new(
                id as i32,
                format!("SYN-{}", id),
                pos,
                magnitude,
                color_index.sample(&mut rng),
            )?);
        }
        log::debug!("Generated {} synthetic stars (seed {})", stars.len(), self.seed);
        Ok(stars)
    }

    // Inverse transform of N(m) ~ log_base^m over the magnitude range
    fn sample_magnitude(&self, rng: &mut StdRng) -> f64 {
        let range = self.max_magnitude - self.min_magnitude;
        let t = Uniform::from(0.0..1.0).sample(rng) * (self.log_base.powf(range) - 1.0) + 1.0;
        self.min_magnitude + t.log(self.log_base).clamp(0.0, range)
    }
}

/// `count` random stars with the default magnitude distribution
pub fn random_stars(count: usize, seed: u64) -> Result<Vec<Star>> {
    SyntheticCatalogConfig::new().with_count(count).with_seed(seed).generate()
}
