//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper prints a one-line confirmation naming the resource kind and
//! id, followed by the resource itself where that is useful.

use std::fmt;

use super::models::PlateView;
use crate::models::{Color, Plate, Project};

/// A resource that operation results can name.
pub trait Resource: fmt::Display {
    /// Lowercase resource kind, e.g. `plate`.
    const KIND: &'static str;

    fn id(&self) -> u64;

    fn name(&self) -> &str;
}

impl Resource for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Resource for Color {
    const KIND: &'static str = "color";

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Resource for Plate {
    const KIND: &'static str = "plate";

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Resource for PlateView<'_> {
    const KIND: &'static str = "plate";

    fn id(&self) -> u64 {
        self.plate.id
    }

    fn name(&self) -> &str {
        &self.plate.name
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use amsplan_core::{display::CreateResult, models::Project};
///
/// let result = CreateResult::new(Project::new(1, "Chess set"));
/// assert!(result.to_string().starts_with("Created project with ID: 1\n"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
///
/// ```rust
/// use std::collections::BTreeSet;
///
/// use amsplan_core::{display::UpdateResult, models::Plate};
///
/// let plate = Plate::new(4, 1, "Base", BTreeSet::from([1]), 60);
/// let result = UpdateResult::with_changes(plate, vec!["Set duration to 60 minutes".into()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated plate with ID: 4"));
/// assert!(output.contains("- Set duration to 60 minutes"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.name(),
            self.resource.id()
        )
    }
}
