//! Patch graph: every patch in the world plus the current-patch selector.
//!
//! The [`PatchMap`] owns its [`Patch`] nodes in a `BTreeMap<PatchId, Patch>`.
//! Edges live inside the patches as id sets and are resolved here, so a link
//! to an unregistered id simply resolves to nothing.
//!
//! Species lookup is biased toward the current patch: it is searched first,
//! and only on a miss are the remaining patches scanned in ascending id order.

use std::collections::BTreeMap;
use std::sync::Arc;

use habitat_types::{PatchId, Species};
use tracing::{debug, trace};

use crate::error::PatchError;
use crate::patch::Patch;

/// The collection of all patches in a world.
#[derive(Debug, Clone)]
pub struct PatchMap {
    /// All patches indexed by their identifier.
    patches: BTreeMap<PatchId, Patch>,
    /// The focal patch. Names an unregistered id only while the map is empty.
    current_patch_id: PatchId,
}

impl PatchMap {
    /// Create an empty patch map with the current patch unset.
    pub const fn new() -> Self {
        Self {
            patches: BTreeMap::new(),
            current_patch_id: PatchId(0),
        }
    }

    // -------------------------------------------------------------------
    // Patch registration
    // -------------------------------------------------------------------

    /// Take ownership of a patch and register it under its id.
    ///
    /// Neighbour ids of the patch are not required to exist. If the current
    /// id does not resolve yet, the new patch becomes current.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::DuplicatePatch`] if a patch with the same id is
    /// already registered. The map is left unchanged.
    pub fn add_patch(&mut self, patch: Patch) -> Result<(), PatchError> {
        let id = patch.id();
        if self.patches.contains_key(&id) {
            debug!(patch = %id, "Rejected duplicate patch id");
            return Err(PatchError::DuplicatePatch(id));
        }
        debug!(patch = %id, name = patch.name(), "Registered patch");
        self.patches.insert(id, patch);
        if !self.patches.contains_key(&self.current_patch_id) {
            debug!(from = %self.current_patch_id, to = %id, "Current patch changed");
            self.current_patch_id = id;
        }
        Ok(())
    }

    /// Get an immutable reference to a patch.
    pub fn patch(&self, id: PatchId) -> Option<&Patch> {
        self.patches.get(&id)
    }

    /// Get a mutable reference to a patch.
    pub fn patch_mut(&mut self, id: PatchId) -> Option<&mut Patch> {
        self.patches.get_mut(&id)
    }

    /// Return the number of registered patches.
    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    /// Whether no patch has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Return all patch IDs in ascending order.
    pub fn patch_ids(&self) -> Vec<PatchId> {
        self.patches.keys().copied().collect()
    }

    /// Iterate over all patches in ascending id order.
    pub fn patches(&self) -> impl Iterator<Item = (&PatchId, &Patch)> {
        self.patches.iter()
    }

    // -------------------------------------------------------------------
    // Current patch
    // -------------------------------------------------------------------

    /// Select the focal patch.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::PatchNotFound`] if `id` is not registered; the
    /// current selection is kept.
    pub fn set_current_patch(&mut self, id: PatchId) -> Result<(), PatchError> {
        if !self.patches.contains_key(&id) {
            return Err(PatchError::PatchNotFound(id));
        }
        debug!(from = %self.current_patch_id, to = %id, "Current patch changed");
        self.current_patch_id = id;
        Ok(())
    }

    /// The id of the focal patch, whether or not it is registered.
    pub const fn current_patch_id(&self) -> PatchId {
        self.current_patch_id
    }

    /// The focal patch, if the current id resolves.
    pub fn current_patch(&self) -> Option<&Patch> {
        self.patches.get(&self.current_patch_id)
    }

    /// Mutable access to the focal patch, if the current id resolves.
    pub fn current_patch_mut(&mut self) -> Option<&mut Patch> {
        self.patches.get_mut(&self.current_patch_id)
    }

    // -------------------------------------------------------------------
    // Species queries
    // -------------------------------------------------------------------

    /// Find a species by name anywhere in the map.
    ///
    /// The current patch is searched first. On a miss every other patch is
    /// scanned in ascending id order and the first match is returned, so when
    /// several patches hold a species with this name the answer depends only
    /// on the map's contents and the current selection.
    pub fn find_species_by_name(&self, name: &str) -> Option<&Arc<Species>> {
        if let Some(found) = self
            .current_patch()
            .and_then(|patch| patch.search_species_by_name(name))
        {
            trace!(species = name, patch = %self.current_patch_id, "Found species in current patch");
            return Some(found);
        }

        debug!(
            species = name,
            current = %self.current_patch_id,
            "Species not in current patch, scanning all patches"
        );
        self.patches
            .iter()
            .filter(|(id, _)| **id != self.current_patch_id)
            .find_map(|(_, patch)| patch.search_species_by_name(name))
    }

    /// Ids of every patch holding the named species, ascending.
    pub fn patches_with_species(&self, name: &str) -> Vec<PatchId> {
        self.patches
            .iter()
            .filter(|(_, patch)| patch.species_entry(name).is_some())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Sum of the named species' populations over all patches.
    pub fn total_population(&self, name: &str) -> u64 {
        self.patches
            .values()
            .filter_map(|patch| patch.population_of(name))
            .fold(0_u64, |acc, population| {
                acc.saturating_add(u64::from(population))
            })
    }

    // -------------------------------------------------------------------
    // Graph queries
    // -------------------------------------------------------------------

    /// Link two registered patches in both directions.
    ///
    /// Returns `true` if either direction was newly recorded.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::PatchNotFound`] if either endpoint is missing.
    /// Nothing is linked in that case.
    pub fn link_patches(&mut self, a: PatchId, b: PatchId) -> Result<bool, PatchError> {
        if !self.patches.contains_key(&a) {
            return Err(PatchError::PatchNotFound(a));
        }
        if !self.patches.contains_key(&b) {
            return Err(PatchError::PatchNotFound(b));
        }

        let forward = self
            .patches
            .get_mut(&a)
            .ok_or(PatchError::PatchNotFound(a))?
            .add_neighbour(b);
        let backward = self
            .patches
            .get_mut(&b)
            .ok_or(PatchError::PatchNotFound(b))?
            .add_neighbour(a);
        Ok(forward || backward)
    }

    /// Resolve the neighbours of a patch through this map.
    ///
    /// Neighbour ids that are not registered are skipped. Returns an empty
    /// list if `id` itself is unknown.
    pub fn neighbours_of(&self, id: PatchId) -> Vec<&Patch> {
        let Some(patch) = self.patches.get(&id) else {
            return Vec::new();
        };
        patch
            .neighbours()
            .iter()
            .filter_map(|neighbour| self.patches.get(neighbour))
            .collect()
    }

    /// Every `(patch, neighbour)` link whose neighbour is not registered.
    pub fn dangling_neighbours(&self) -> Vec<(PatchId, PatchId)> {
        let mut dangling = Vec::new();
        for (id, patch) in &self.patches {
            for neighbour in patch.neighbours() {
                if !self.patches.contains_key(neighbour) {
                    dangling.push((*id, *neighbour));
                }
            }
        }
        dangling
    }
}

impl Default for PatchMap {
    fn default() -> Self {
        Self::new()
    }
}
