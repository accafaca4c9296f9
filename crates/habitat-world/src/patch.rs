//! Patch node: one habitat region with its species populations.
//!
//! A [`Patch`] owns a copy of its [`Biome`], a list of species entries and a
//! set of neighbour ids. Species are held through [`Arc`] handles because the
//! same species lives in many patches at once, each with its own population.
//!
//! Neighbours are plain [`PatchId`] values. They are resolved through the
//! owning [`PatchMap`](crate::PatchMap) when needed and may refer to patches
//! that were never registered.

use std::collections::BTreeSet;
use std::sync::Arc;

use habitat_types::{Biome, PatchId, Species};
use tracing::debug;

use crate::error::PatchError;

/// Population given to a species registered without an explicit count.
pub const INITIAL_SPECIES_POPULATION: u32 = 100;

/// A species living in a patch, with the patch-local population.
#[derive(Debug, Clone)]
pub struct SpeciesInPatch {
    /// Shared handle to the species definition.
    pub species: Arc<Species>,
    /// Number of individuals in this patch. Managed by the caller.
    pub population: u32,
}

/// A habitat region in the patch graph.
#[derive(Debug, Clone)]
pub struct Patch {
    id: PatchId,
    name: String,
    biome: Biome,
    /// Insertion-ordered; at most one entry per species name.
    species_in_patch: Vec<SpeciesInPatch>,
    adjacent_patches: BTreeSet<PatchId>,
}

impl Patch {
    /// Create a patch, copying `biome_template` into its own storage.
    ///
    /// Starts with no species and no neighbours.
    pub fn new(name: &str, id: PatchId, biome_template: &Biome) -> Self {
        Self {
            id,
            name: name.to_owned(),
            biome: biome_template.clone(),
            species_in_patch: Vec::new(),
            adjacent_patches: BTreeSet::new(),
        }
    }

    /// The patch identifier, fixed at construction.
    pub const fn id(&self) -> PatchId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The patch's environmental parameters.
    pub const fn biome(&self) -> &Biome {
        &self.biome
    }

    /// Mutable access to the patch's environmental parameters.
    pub const fn biome_mut(&mut self) -> &mut Biome {
        &mut self.biome
    }

    // -------------------------------------------------------------------
    // Neighbours
    // -------------------------------------------------------------------

    /// Record a link to the patch with `id`.
    ///
    /// Returns `true` if the link is new, `false` if it was already present.
    /// The id is not checked against any map.
    pub fn add_neighbour(&mut self, id: PatchId) -> bool {
        self.adjacent_patches.insert(id)
    }

    /// Ids of all linked patches, in ascending order.
    pub const fn neighbours(&self) -> &BTreeSet<PatchId> {
        &self.adjacent_patches
    }

    /// Whether a link to `id` has been recorded.
    pub fn is_adjacent_to(&self, id: PatchId) -> bool {
        self.adjacent_patches.contains(&id)
    }

    // -------------------------------------------------------------------
    // Species
    // -------------------------------------------------------------------

    /// Register a species with [`INITIAL_SPECIES_POPULATION`] individuals.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::DuplicateSpecies`] if a species with the same
    /// name is already present.
    pub fn add_species(&mut self, species: Arc<Species>) -> Result<(), PatchError> {
        self.add_species_with_population(species, INITIAL_SPECIES_POPULATION)
    }

    /// Register a species with an explicit population.
    ///
    /// The first registration wins: a duplicate leaves the existing entry,
    /// including its population, untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::DuplicateSpecies`] if a species with the same
    /// name is already present.
    pub fn add_species_with_population(
        &mut self,
        species: Arc<Species>,
        population: u32,
    ) -> Result<(), PatchError> {
        if self.species_entry(&species.name).is_some() {
            debug!(patch = %self.id, species = %species.name, "Species already in patch");
            return Err(PatchError::DuplicateSpecies {
                patch: self.id,
                species: species.name.clone(),
            });
        }
        self.species_in_patch.push(SpeciesInPatch {
            species,
            population,
        });
        Ok(())
    }

    /// All species entries in insertion order.
    pub fn species(&self) -> &[SpeciesInPatch] {
        &self.species_in_patch
    }

    /// Number of distinct species in this patch.
    pub fn species_count(&self) -> usize {
        self.species_in_patch.len()
    }

    /// Find a species in this patch by name.
    pub fn search_species_by_name(&self, name: &str) -> Option<&Arc<Species>> {
        self.species_entry(name).map(|entry| &entry.species)
    }

    /// Find the full entry (species and population) by species name.
    pub fn species_entry(&self, name: &str) -> Option<&SpeciesInPatch> {
        self.species_in_patch
            .iter()
            .find(|entry| entry.species.is_named(name))
    }

    /// Population of the named species in this patch.
    pub fn population_of(&self, name: &str) -> Option<u32> {
        self.species_entry(name).map(|entry| entry.population)
    }

    /// Overwrite the population of a species already in this patch.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::SpeciesNotFound`] if the species is not here.
    pub fn set_population(&mut self, name: &str, population: u32) -> Result<(), PatchError> {
        let id = self.id;
        let entry = self
            .species_in_patch
            .iter_mut()
            .find(|entry| entry.species.is_named(name))
            .ok_or_else(|| PatchError::SpeciesNotFound {
                patch: id,
                species: name.to_owned(),
            })?;
        entry.population = population;
        Ok(())
    }
}
