//! Error types for the `habitat-world` crate.
//!
//! Every condition here is recoverable: a rejected mutation leaves the graph
//! exactly as it was. Lookups that may miss return [`Option`] instead.

use habitat_types::PatchId;

/// Errors that can occur during patch-graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// A patch with this id is already registered in the map.
    #[error("duplicate patch id: {0}")]
    DuplicatePatch(PatchId),

    /// No patch with this id is registered in the map.
    #[error("patch not found: {0}")]
    PatchNotFound(PatchId),

    /// The species is already present in the patch.
    #[error("species {species} already present in patch {patch}")]
    DuplicateSpecies {
        /// The patch that rejected the species.
        patch: PatchId,
        /// Name of the species.
        species: String,
    },

    /// The species is not present in the patch.
    #[error("species {species} not present in patch {patch}")]
    SpeciesNotFound {
        /// The patch that was searched.
        patch: PatchId,
        /// Name of the species.
        species: String,
    },
}
