//! Filament colors declared by a project.

use serde::{Deserialize, Serialize};

/// Identifier of a color. Assigned by the store in increasing order, so
/// ascending ids follow declaration order within a project.
pub type ColorId = u64;

/// A filament color that plates can require.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    /// Unique identifier for the color
    pub id: ColorId,

    /// Display name (e.g. "Galaxy Black")
    pub name: String,

    /// Declaration order of the color within its project (0-indexed)
    pub position: u32,
}

impl Color {
    pub fn new(id: ColorId, name: impl Into<String>, position: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}
