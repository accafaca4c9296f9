//! Core entity structs shared across the workspace.
//!
//! [`Species`] and [`Biome`] are owned by systems outside the patch graph
//! (trait definitions, environment simulation). The graph only stores them:
//! species as shared handles, biomes as per-patch copies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::SpeciesId;

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// A species definition.
///
/// Within a patch a species is identified by [`Species::name`]; two handles
/// with the same name count as the same species even if their ids differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Species {
    /// Bookkeeping identifier.
    pub id: SpeciesId,
    /// Internal name, unique per world.
    pub name: String,
    /// Genus shown to the player.
    pub genus: String,
    /// Specific epithet shown to the player.
    pub epithet: String,
}

impl Species {
    /// Create a species with a fresh id.
    pub fn new(name: &str, genus: &str, epithet: &str) -> Self {
        Self {
            id: SpeciesId::new(),
            name: name.to_owned(),
            genus: genus.to_owned(),
            epithet: epithet.to_owned(),
        }
    }

    /// Binomial display name, e.g. "Primum thermophilum".
    pub fn formatted_name(&self) -> String {
        format!("{} {}", self.genus, self.epithet)
    }

    /// Whether this species answers to `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

// ---------------------------------------------------------------------------
// Biome
// ---------------------------------------------------------------------------

/// Concentration of one compound in a biome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BiomeCompound {
    /// Amount available as clouds.
    pub amount: f32,
    /// Fraction dissolved in the environment (0.0--1.0).
    pub dissolved: f32,
}

/// Environmental parameters of a patch.
///
/// Patches copy a biome template on construction, so editing one patch's
/// biome never affects another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Biome {
    /// Template name, e.g. "tidepool".
    pub name: String,
    /// Average temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative sunlight intensity (0.0--1.0).
    pub sunlight: f32,
    /// Compounds keyed by internal compound name.
    pub compounds: BTreeMap<String, BiomeCompound>,
}

impl Biome {
    /// Create a biome with no compounds.
    pub fn new(name: &str, temperature: f32, sunlight: f32) -> Self {
        Self {
            name: name.to_owned(),
            temperature,
            sunlight,
            compounds: BTreeMap::new(),
        }
    }

    /// Builder-style helper to add or replace a compound.
    #[must_use]
    pub fn with_compound(mut self, compound: &str, amount: f32, dissolved: f32) -> Self {
        self.compounds
            .insert(compound.to_owned(), BiomeCompound { amount, dissolved });
        self
    }

    /// Amount of a compound, if the biome defines it.
    pub fn compound_amount(&self, compound: &str) -> Option<f32> {
        self.compounds.get(compound).map(|c| c.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_identity_is_by_name() {
        let algae = Species::new("algae", "Viridis", "marina");
        assert!(algae.is_named("algae"));
        assert!(!algae.is_named("Algae"));
        assert_eq!(algae.formatted_name(), "Viridis marina");
    }

    #[test]
    fn biome_compounds() {
        let biome = Biome::new("tidepool", 18.0, 0.8)
            .with_compound("glucose", 12.0, 0.1)
            .with_compound("ammonia", 4.0, 0.5);
        assert_eq!(biome.compounds.len(), 2);
        assert!(biome.compound_amount("glucose").is_some());
        assert!(biome.compound_amount("hydrogensulfide").is_none());
    }

    #[test]
    fn biome_serde_roundtrip() {
        let biome = Biome::new("reef", 22.0, 0.6).with_compound("oxygen", 5.0, 0.2);
        let json = serde_json::to_string(&biome).unwrap_or_default();
        let restored: Result<Biome, _> = serde_json::from_str(&json);
        assert_eq!(restored.ok(), Some(biome));
    }
}
