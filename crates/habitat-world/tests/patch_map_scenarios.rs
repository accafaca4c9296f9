//! End-to-end scenarios for the patch graph through the public API.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use habitat_types::{Biome, PatchId, Species};
use habitat_world::{Patch, PatchError, PatchMap};

fn tidepool_and_reef() -> (PatchMap, Arc<Species>) {
    let biome = Biome::new("shallows", 20.0, 0.9);
    let mut tidepool = Patch::new("Tidepool", PatchId(1), &biome);
    let mut reef = Patch::new("Reef", PatchId(2), &biome);

    assert!(tidepool.add_neighbour(PatchId(2)));
    assert!(reef.add_neighbour(PatchId(1)));

    let algae = Arc::new(Species::new("Algae", "Viridis", "marina"));
    tidepool.add_species(Arc::clone(&algae)).unwrap();

    let mut map = PatchMap::new();
    map.add_patch(tidepool).unwrap();
    map.add_patch(reef).unwrap();
    map.set_current_patch(PatchId(2)).unwrap();
    (map, algae)
}

#[test]
fn species_found_through_fallback_scan() {
    let (map, algae) = tidepool_and_reef();

    assert!(map.current_patch().unwrap().search_species_by_name("Algae").is_none());
    let found = map.find_species_by_name("Algae").unwrap();
    assert!(Arc::ptr_eq(found, &algae));

    let tidepool = map.patch(PatchId(1)).unwrap();
    assert_eq!(tidepool.population_of("Algae"), Some(100));
}

#[test]
fn neighbours_resolve_in_both_directions() {
    let (map, _) = tidepool_and_reef();
    assert_eq!(map.neighbours_of(PatchId(1))[0].name(), "Reef");
    assert_eq!(map.neighbours_of(PatchId(2))[0].name(), "Tidepool");
    assert!(map.dangling_neighbours().is_empty());
}

#[test]
fn current_patch_lookup_ignores_other_patches() {
    // The same answer whether or not other patches also hold the species.
    let local = Arc::new(Species::new("Algae", "Viridis", "marina"));
    let elsewhere = Arc::new(Species::new("Algae", "Viridis", "profunda"));
    let biome = Biome::default();

    let build = |with_others: bool| {
        let mut map = PatchMap::new();
        for id in 1..=4 {
            let mut patch = Patch::new("Patch", PatchId(id), &biome);
            if id == 3 {
                patch.add_species(Arc::clone(&local)).unwrap();
            } else if with_others {
                patch.add_species(Arc::clone(&elsewhere)).unwrap();
            }
            map.add_patch(patch).unwrap();
        }
        map.set_current_patch(PatchId(3)).unwrap();
        map
    };

    let crowded = build(true);
    let alone = build(false);
    assert!(Arc::ptr_eq(crowded.find_species_by_name("Algae").unwrap(), &local));
    assert!(Arc::ptr_eq(alone.find_species_by_name("Algae").unwrap(), &local));
}

#[test]
fn duplicate_patch_id_keeps_original() {
    let biome = Biome::default();
    let mut map = PatchMap::new();
    map.add_patch(Patch::new("Original", PatchId(5), &biome)).unwrap();

    let err = map.add_patch(Patch::new("Impostor", PatchId(5), &biome));
    assert_eq!(err, Err(PatchError::DuplicatePatch(PatchId(5))));
    assert_eq!(map.patch_count(), 1);
    assert_eq!(map.patch_ids(), vec![PatchId(5)]);
    assert_eq!(map.patch(PatchId(5)).unwrap().name(), "Original");
}

#[test]
fn unknown_current_patch_keeps_selection() {
    let (mut map, _) = tidepool_and_reef();
    assert_eq!(
        map.set_current_patch(PatchId(77)),
        Err(PatchError::PatchNotFound(PatchId(77)))
    );
    assert_eq!(map.current_patch_id(), PatchId(2));
}

#[test]
fn missing_species_is_none() {
    let (map, _) = tidepool_and_reef();
    assert!(map.find_species_by_name("Krill").is_none());
    assert!(map.patch(PatchId(3)).is_none());
}

#[test]
fn populations_are_caller_managed() {
    let (mut map, algae) = tidepool_and_reef();
    map.current_patch_mut()
        .unwrap()
        .add_species_with_population(Arc::clone(&algae), 5)
        .unwrap();
    map.patch_mut(PatchId(1)).unwrap().set_population("Algae", 60).unwrap();

    assert_eq!(map.total_population("Algae"), 65);
    assert_eq!(Arc::strong_count(&algae), 3);
}

#[test]
fn current_patch_resolves_once_map_is_non_empty() {
    let mut map = PatchMap::new();
    assert!(map.current_patch().is_none());

    map.add_patch(Patch::new("Tidepool", PatchId(1), &Biome::default()))
        .unwrap();
    assert_eq!(map.patch_count(), 1);
    assert_eq!(map.current_patch_id(), PatchId(1));
    assert_eq!(map.current_patch().unwrap().name(), "Tidepool");
}
