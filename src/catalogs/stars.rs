use std::collections::HashMap;
use std::io::BufRead;

use super::CatalogueLoader;
use crate::celestial::{Asterism, Star};
use crate::{check_argument, Result, SkyError};

/// Stars and the asterisms drawn between them
///
/// Each asterism is stored alongside the indices of its stars in
/// [`stars`](StarCatalogue::stars), so a renderer can reuse the projected
/// position of star `i` without searching for it.
#[derive(Debug, Clone)]
pub struct StarCatalogue {
    stars: Vec<Star>,
    asterisms: Vec<Asterism>,
    asterism_indices: Vec<Vec<usize>>,
}

impl StarCatalogue {
    /// Creates a catalogue
    ///
    /// # Errors
    ///
    /// Fails when an asterism contains a star that is not in `stars`.
    pub fn new(stars: Vec<Star>, asterisms: Vec<Asterism>) -> Result<Self> {
        // Candidates by Hipparcos id; equality decides between homonyms
        let mut by_id: HashMap<i32, Vec<usize>> = HashMap::new();
        for (index, star) in stars.iter().enumerate() {
            by_id.entry(star.hipparcos_id()).or_default().push(index);
        }
        let index_of = |star: &Star| -> Option<usize> {
            by_id
                .get(&star.hipparcos_id())?
                .iter()
                .copied()
                .find(|&index| stars[index] == *star)
        };

        let mut asterism_indices = Vec::with_capacity(asterisms.len());
        for asterism in &asterisms {
            let mut indices = Vec::with_capacity(asterism.stars().len());
            for star in asterism.stars() {
                let index = index_of(star);
                check_argument(index.is_some(), || {
                    format!("asterism star {} (HIP {}) is not in the catalogue", star, star.hipparcos_id())
                })?;
                indices.extend(index);
            }
            asterism_indices.push(indices);
        }

        Ok(Self {
            stars,
            asterisms,
            asterism_indices,
        })
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Indices in [`stars`](Self::stars) of the stars of `asterism`, in the
    /// asterism's order
    ///
    /// # Errors
    ///
    /// Fails with [`SkyError::UnknownAsterism`] when `asterism` is not part of
    /// the catalogue.
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize]> {
        self.asterisms
            .iter()
            .position(|candidate| candidate == asterism)
            .map(|position| self.asterism_indices[position].as_slice())
            .ok_or(SkyError::UnknownAsterism)
    }
}

/// Accumulates stars and asterisms before freezing them into a
/// [`StarCatalogue`]
#[derive(Debug, Clone, Default)]
pub struct StarCatalogueBuilder {
    stars: Vec<Star>,
    asterisms: Vec<Asterism>,
}

impl StarCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_star(&mut self, star: Star) -> &mut Self {
        self.stars.push(star);
        self
    }

    /// Stars added so far
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn add_asterism(&mut self, asterism: Asterism) -> &mut Self {
        self.asterisms.push(asterism);
        self
    }

    /// Asterisms added so far
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Runs `loader` over `reader`, adding what it finds to this builder
    pub fn load_from<R, L>(&mut self, reader: R, loader: &L) -> Result<&mut Self>
    where
        R: BufRead,
        L: CatalogueLoader<Self>,
    {
        loader.load(reader, self)?;
        Ok(self)
    }

    pub fn build(self) -> Result<StarCatalogue> {
        StarCatalogue::new(self.stars, self.asterisms)
    }
}
