//! Shared type definitions for the habitat patch graph.
//!
//! Value types that flow between the patch graph and the systems around it
//! (species definitions, environment simulation, observer UI). Types are
//! exported to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Patch and species identifiers
//! - [`structs`] -- [`Species`] and [`Biome`] value types

pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::{PatchId, SpeciesId};
pub use structs::{Biome, BiomeCompound, Species};
