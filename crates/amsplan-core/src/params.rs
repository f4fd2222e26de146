//! Parameter structures for planner operations
//!
//! These structures are shared by every interface (the CLI today) and carry
//! no framework-specific derives. Interface layers define their own argument
//! types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (validate())    │───▶│  (store/engine) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Parameters that need checking expose a `validate()` method returning the
//! normalized values. Negative durations are clamped to zero rather than
//! rejected; a zero slot capacity and blank names are rejected.

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{ColorId, PlateStatus, SortOrder, DEFAULT_SLOT_CAPACITY},
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_project, print_plan, show_plate, remove_plate and
/// export_project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    /// Name of the project (required)
    pub name: String,
    /// Number of AMS slots; defaults to 4
    pub slot_capacity: Option<u32>,
    /// Duration tie-break direction; defaults to ascending
    pub sort_order: Option<SortOrder>,
}

impl CreateProject {
    /// Validate and return `(name, slot_capacity, sort_order)`.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - blank name or zero slot capacity
    pub fn validate(&self) -> Result<(String, u32, SortOrder)> {
        let name = validate_name("name", &self.name)?;
        let slot_capacity = match self.slot_capacity {
            Some(slots) => validate_capacity(slots)?,
            None => DEFAULT_SLOT_CAPACITY,
        };
        Ok((name, slot_capacity, self.sort_order.unwrap_or_default()))
    }
}

/// Parameters for changing project settings. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    /// Project ID to update (required)
    pub id: u64,
    /// New name
    pub name: Option<String>,
    /// New number of AMS slots
    pub slot_capacity: Option<u32>,
    /// New duration tie-break direction
    pub sort_order: Option<SortOrder>,
}

impl UpdateProject {
    /// Validate the fields that are set.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - blank name or zero slot capacity
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name("name", name)?;
        }
        if let Some(slots) = self.slot_capacity {
            validate_capacity(slots)?;
        }
        Ok(())
    }

    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.slot_capacity.is_some() || self.sort_order.is_some()
    }
}

/// Parameters for deleting a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProject {
    /// The ID of the project to delete
    pub id: u64,
    /// Must be true to actually delete
    pub confirmed: bool,
}

/// Parameters for declaring a new color in a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddColor {
    /// Project the color belongs to
    pub project_id: u64,
    /// Display name of the color
    pub name: String,
}

impl AddColor {
    /// Validate and return the trimmed name.
    pub fn validate(&self) -> Result<String> {
        validate_name("name", &self.name)
    }
}

/// Parameters for renaming a color.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameColor {
    pub id: ColorId,
    pub name: String,
}

impl RenameColor {
    /// Validate and return the trimmed name.
    pub fn validate(&self) -> Result<String> {
        validate_name("name", &self.name)
    }
}

/// Parameters for removing a color.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveColor {
    /// Color to remove
    pub id: ColorId,
    /// Remove the color from plates that still require it instead of failing
    #[serde(default)]
    pub force: bool,
}

/// Parameters for adding a plate to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPlate {
    /// Project the plate belongs to
    pub project_id: u64,
    /// Name of the plate
    pub name: String,
    /// Colors the plate requires
    #[serde(default)]
    pub colors: Vec<ColorId>,
    /// Estimated print duration in minutes; negative values become 0
    pub estimated_minutes: Option<i64>,
}

impl AddPlate {
    /// Validate and return `(name, estimated_minutes)`.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - blank name
    pub fn validate(&self) -> Result<(String, u32)> {
        let name = validate_name("name", &self.name)?;
        let minutes = self.estimated_minutes.map(normalize_minutes).unwrap_or(0);
        Ok((name, minutes))
    }
}

/// Parameters for editing a plate. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlate {
    /// Plate ID to update (required)
    pub id: u64,
    /// New name
    pub name: Option<String>,
    /// Replacement set of required colors
    pub colors: Option<Vec<ColorId>>,
    /// New estimated duration in minutes; negative values become 0
    pub estimated_minutes: Option<i64>,
}

impl UpdatePlate {
    /// Validate and return the normalized `(name, estimated_minutes)`.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - blank name
    pub fn validate(&self) -> Result<(Option<String>, Option<u32>)> {
        let name = self
            .name
            .as_deref()
            .map(|n| validate_name("name", n))
            .transpose()?;
        Ok((name, self.estimated_minutes.map(normalize_minutes)))
    }
}

/// Parameters for moving a plate through its lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetPlateStatus {
    pub id: u64,
    pub status: PlateStatus,
}

/// Parameters for recording which colors are in the AMS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetLoadedColors {
    pub project_id: u64,
    /// Loaded colors; empty means the AMS is empty
    #[serde(default)]
    pub colors: Vec<ColorId>,
}

/// Parameters for importing a project from an exported JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportProject {
    pub path: PathBuf,
}

pub(crate) fn validate_name(field: &str, name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_capacity(slots: u32) -> Result<u32> {
    if slots == 0 {
        return Err(PlannerError::invalid_input("slot_capacity")
            .with_reason("an AMS needs at least one slot"));
    }
    Ok(slots)
}

/// Clamps a duration to a non-negative number of minutes.
pub fn normalize_minutes(minutes: i64) -> u32 {
    if minutes < 0 {
        warn!("Negative duration {minutes} treated as 0 minutes");
        0
    } else {
        u32::try_from(minutes).unwrap_or_else(|_| {
            warn!("Duration {minutes} too large, capped at {} minutes", u32::MAX);
            u32::MAX
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_defaults() {
        let params = CreateProject {
            name: "  Chess set ".to_string(),
            ..Default::default()
        };
        let (name, slots, order) = params.validate().unwrap();
        assert_eq!(name, "Chess set");
        assert_eq!(slots, 4);
        assert_eq!(order, SortOrder::Ascending);
    }

    #[test]
    fn test_create_project_rejects_zero_slots() {
        let params = CreateProject {
            name: "Chess set".to_string(),
            slot_capacity: Some(0),
            sort_order: None,
        };
        match params.validate().unwrap_err() {
            PlannerError::InvalidInput { field, .. } => assert_eq!(field, "slot_capacity"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_project_rejects_blank_name() {
        let params = CreateProject {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_update_project_has_changes() {
        let mut params = UpdateProject {
            id: 1,
            ..Default::default()
        };
        assert!(!params.has_changes());
        params.sort_order = Some(SortOrder::Descending);
        assert!(params.has_changes());
        assert!(params.validate().is_ok());

        params.slot_capacity = Some(0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_add_plate_clamps_negative_minutes() {
        let params = AddPlate {
            project_id: 1,
            name: "Rook".to_string(),
            colors: vec![1],
            estimated_minutes: Some(-15),
        };
        assert_eq!(params.validate().unwrap(), ("Rook".to_string(), 0));
    }

    #[test]
    fn test_update_plate_validate() {
        let params = UpdatePlate {
            id: 3,
            name: Some("Queen".to_string()),
            colors: None,
            estimated_minutes: Some(95),
        };
        assert_eq!(
            params.validate().unwrap(),
            (Some("Queen".to_string()), Some(95))
        );

        let blank = UpdatePlate {
            id: 3,
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_normalize_minutes() {
        assert_eq!(normalize_minutes(-1), 0);
        assert_eq!(normalize_minutes(0), 0);
        assert_eq!(normalize_minutes(240), 240);
        assert_eq!(normalize_minutes(i64::from(u32::MAX)), u32::MAX);
        assert_eq!(normalize_minutes(i64::from(u32::MAX) + 1), u32::MAX);
        assert_eq!(normalize_minutes(i64::MAX), u32::MAX);
    }
}
