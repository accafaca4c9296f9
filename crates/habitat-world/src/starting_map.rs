//! Default starting patch map.
//!
//! Five patches: a shallow ring (Tidepool, Reef, Estuary) and a deep branch
//! off the reef (Hydrothermal Vents, Abyss). The seed species lives in every
//! shallow patch, sharing one handle.

use std::sync::Arc;

use habitat_types::{Biome, PatchId, Species};

use crate::config::HabitatConfig;
use crate::error::PatchError;
use crate::patch::Patch;
use crate::patch_map::PatchMap;

/// Name of the species every new world starts with.
pub const SEED_SPECIES_NAME: &str = "Primum thermophilum";

/// Identifiers for all starting patches.
#[derive(Debug, Clone, Copy)]
pub struct StartingPatchIds {
    /// Tidepool: warm, bright, glucose rich.
    pub tidepool: PatchId,
    /// Reef: temperate, oxygenated.
    pub reef: PatchId,
    /// Estuary: brackish, ammonia rich.
    pub estuary: PatchId,
    /// Hydrothermal Vents: dark, hot, hydrogen sulfide.
    pub vents: PatchId,
    /// Abyss: cold and dark.
    pub abyss: PatchId,
}

impl Default for StartingPatchIds {
    fn default() -> Self {
        Self {
            tidepool: PatchId(0),
            reef: PatchId(1),
            estuary: PatchId(2),
            vents: PatchId(3),
            abyss: PatchId(4),
        }
    }
}

fn tidepool_biome() -> Biome {
    Biome::new("tidepool", 24.0, 1.0)
        .with_compound("glucose", 20.0, 0.2)
        .with_compound("oxygen", 8.0, 0.6)
}

fn reef_biome() -> Biome {
    Biome::new("reef", 21.0, 0.7)
        .with_compound("glucose", 10.0, 0.1)
        .with_compound("oxygen", 12.0, 0.7)
}

fn estuary_biome() -> Biome {
    Biome::new("estuary", 17.0, 0.6)
        .with_compound("ammonia", 14.0, 0.4)
        .with_compound("phosphates", 9.0, 0.3)
}

fn vents_biome() -> Biome {
    Biome::new("hydrothermal_vent", 80.0, 0.0)
        .with_compound("hydrogensulfide", 25.0, 0.5)
        .with_compound("ammonia", 6.0, 0.2)
}

fn abyss_biome() -> Biome {
    Biome::new("abyssopelagic", 2.0, 0.0).with_compound("phosphates", 3.0, 0.1)
}

/// Create the default starting patch map.
///
/// Seed populations come from `population.initial_species_population` and
/// the current patch from `world.starting_patch`.
///
/// # Errors
///
/// Returns [`PatchError::PatchNotFound`] if `world.starting_patch` is not
/// one of the starting patches.
pub fn create_starting_map(
    config: &HabitatConfig,
) -> Result<(PatchMap, StartingPatchIds), PatchError> {
    let ids = StartingPatchIds::default();
    let population = config.population.initial_species_population;
    let seed = Arc::new(Species::new(SEED_SPECIES_NAME, "Primum", "thermophilum"));

    let mut map = PatchMap::new();
    for (id, name, biome, seeded) in [
        (ids.tidepool, "Tidepool", tidepool_biome(), true),
        (ids.reef, "Reef", reef_biome(), true),
        (ids.estuary, "Estuary", estuary_biome(), true),
        (ids.vents, "Hydrothermal Vents", vents_biome(), false),
        (ids.abyss, "Abyss", abyss_biome(), false),
    ] {
        let mut patch = Patch::new(name, id, &biome);
        if seeded {
            patch.add_species_with_population(Arc::clone(&seed), population)?;
        }
        map.add_patch(patch)?;
    }

    // Shallow ring.
    map.link_patches(ids.tidepool, ids.reef)?;
    map.link_patches(ids.reef, ids.estuary)?;
    map.link_patches(ids.estuary, ids.tidepool)?;
    // Deep branch.
    map.link_patches(ids.reef, ids.vents)?;
    map.link_patches(ids.vents, ids.abyss)?;

    map.set_current_patch(PatchId(config.world.starting_patch))?;
    tracing::info!(
        world = %config.world.name,
        patches = map.patch_count(),
        current = %map.current_patch_id(),
        "Starting patch map created"
    );

    Ok((map, ids))
}
