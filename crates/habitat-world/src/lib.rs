//! Patch graph for the habitat simulation.
//!
//! This crate models the world as a small graph of habitat patches. Each
//! patch holds species populations and id links to its neighbours; the
//! [`PatchMap`] owns every patch and tracks which one is current.
//!
//! # Modules
//!
//! - [`config`] -- Typed YAML configuration with defaults.
//! - [`error`] -- Error types for patch-graph operations.
//! - [`patch`] -- [`Patch`] nodes with shared species handles and
//!   per-patch populations.
//! - [`patch_map`] -- The owning graph, current-patch selection and
//!   locality-biased species lookup.
//! - [`starting_map`] -- Default five-patch starting world.

pub mod config;
pub mod error;
pub mod patch;
pub mod patch_map;
pub mod starting_map;

// Re-export primary types at crate root.
pub use config::{ConfigError, HabitatConfig, LOG_LEVEL_ENV};
pub use error::PatchError;
pub use patch::{INITIAL_SPECIES_POPULATION, Patch, SpeciesInPatch};
pub use patch_map::PatchMap;
pub use starting_map::{SEED_SPECIES_NAME, StartingPatchIds, create_starting_map};
