//! Project summary types for list output.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Project, SortOrder};

/// Summary information about a project with plate statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project ID
    pub id: u64,
    /// Name of the project
    pub name: String,
    /// Number of AMS slots
    pub slot_capacity: u32,
    /// Duration tie-break direction
    pub sort_order: SortOrder,
    /// Number of declared colors
    pub total_colors: u32,
    /// Total number of plates
    pub total_plates: u32,
    /// Number of printed plates
    pub printed_plates: u32,
    /// Number of plates still to print
    pub pending_plates: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        let total_plates = project.plates.len() as u32;
        let printed_plates = project.plates.iter().filter(|p| p.printed).count() as u32;

        Self {
            id: project.id,
            name: project.name.clone(),
            slot_capacity: project.slot_capacity,
            sort_order: project.sort_order,
            total_colors: project.colors.len() as u32,
            total_plates,
            printed_plates,
            pending_plates: total_plates - printed_plates,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
