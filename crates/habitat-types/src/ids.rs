//! Type-safe identifier wrappers.
//!
//! Patches are addressed by small integers chosen by the world builder, so
//! [`PatchId`] wraps an `i32`. Species carry a UUID v7 [`SpeciesId`] for
//! bookkeeping outside the graph; inside a patch a species is identified by
//! its name.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier for a species definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SpeciesId(pub Uuid);

impl SpeciesId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for SpeciesId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a patch (node in the habitat graph).
///
/// `PatchId::default()` is `PatchId(0)`, which is also the "unset" value a
/// fresh patch map starts with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct PatchId(pub i32);

impl PatchId {
    /// Return the raw integer value.
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for PatchId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PatchId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}
