//! Projects: the unit a print plan is computed for.

use std::{collections::BTreeSet, fmt, str::FromStr};

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{Color, ColorId, Plate, PlateId, PlateStatus, PrintPlan};
use crate::{
    error::{PlannerError, Result},
    scheduler::{self, PlanInput},
};

/// Slot count assumed when a project has none configured.
pub const DEFAULT_SLOT_CAPACITY: u32 = 4;

/// Direction of the estimated-duration tie-break when ordering plates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Shorter plates first
    #[default]
    Ascending,

    /// Longer plates first
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// A set of plates sharing one AMS, with the colors they use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Name of the project
    pub name: String,

    /// Number of color slots in the AMS
    pub slot_capacity: u32,

    /// Duration tie-break direction used when planning
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Declared colors, in declaration order
    #[serde(default)]
    pub colors: Vec<Color>,

    /// Plates, in schedule order
    #[serde(default)]
    pub plates: Vec<Plate>,

    /// Colors believed to be in the AMS right now
    #[serde(default)]
    pub loaded_colors: BTreeSet<ColorId>,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Project {
    /// Creates an empty project with the default slot capacity.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            name: name.into(),
            slot_capacity: DEFAULT_SLOT_CAPACITY,
            sort_order: SortOrder::default(),
            colors: Vec::new(),
            plates: Vec::new(),
            loaded_colors: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Slot capacity with a zero value replaced by [`DEFAULT_SLOT_CAPACITY`].
    pub fn capacity(&self) -> usize {
        if self.slot_capacity == 0 {
            DEFAULT_SLOT_CAPACITY as usize
        } else {
            self.slot_capacity as usize
        }
    }

    pub fn color(&self, id: ColorId) -> Option<&Color> {
        self.colors.iter().find(|c| c.id == id)
    }

    pub fn color_name(&self, id: ColorId) -> Option<&str> {
        self.color(id).map(|c| c.name.as_str())
    }

    pub fn plate(&self, id: PlateId) -> Option<&Plate> {
        self.plates.iter().find(|p| p.id == id)
    }

    /// IDs of plates that require the given color.
    pub fn plates_using(&self, color: ColorId) -> Vec<PlateId> {
        self.plates
            .iter()
            .filter(|p| p.colors.contains(&color))
            .map(|p| p.id)
            .collect()
    }

    /// Plates not yet printed, in schedule order.
    pub fn pending_plates(&self) -> impl Iterator<Item = &Plate> {
        self.plates.iter().filter(|p| !p.printed)
    }

    /// The plate currently on the printer, if any.
    pub fn printing_plate(&self) -> Option<&Plate> {
        self.plates.iter().find(|p| p.printing)
    }

    /// Checks that every id exists among the project's colors.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ColorNotFound` for the first unknown id.
    pub fn ensure_colors_exist<'a, I>(&self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a ColorId>,
    {
        for id in ids {
            if self.color(*id).is_none() {
                return Err(PlannerError::ColorNotFound { id: *id });
            }
        }
        Ok(())
    }

    /// Replaces the loaded color set.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ColorNotFound` if a color is not declared in
    /// this project. Capacity is not enforced here.
    pub fn set_loaded_colors(&mut self, colors: BTreeSet<ColorId>) -> Result<()> {
        self.ensure_colors_exist(&colors)?;
        self.loaded_colors = colors;
        Ok(())
    }

    /// Removes a color and everything that references it.
    ///
    /// Without `force`, a color still required by any plate is refused.
    /// With `force`, it is dropped from those plates. It is always dropped
    /// from the loaded set.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ColorNotFound` for an unknown color and
    /// `PlannerError::ColorInUse` when plates still need it and `force` is
    /// false.
    pub fn remove_color(&mut self, id: ColorId, force: bool) -> Result<Color> {
        let index = self
            .colors
            .iter()
            .position(|c| c.id == id)
            .ok_or(PlannerError::ColorNotFound { id })?;

        let users = self.plates_using(id);
        if !users.is_empty() && !force {
            return Err(PlannerError::ColorInUse { id, plates: users });
        }

        for plate in &mut self.plates {
            plate.colors.remove(&id);
        }
        self.loaded_colors.remove(&id);

        let removed = self.colors.remove(index);
        for (position, color) in self.colors.iter_mut().enumerate() {
            color.position = position as u32;
        }
        debug!(
            "Removed color {} from project {} ({} plates affected)",
            id,
            self.id,
            users.len()
        );
        Ok(removed)
    }

    /// Moves a plate to a new status, keeping the printing flag exclusive.
    ///
    /// Setting `Printing` clears the flag on every other plate. Setting
    /// `Printed` clears the plate's own printing flag. Returns the ids of all
    /// plates whose flags changed.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlateNotFound` if the plate is not part of
    /// this project.
    pub fn set_plate_status(&mut self, plate_id: PlateId, status: PlateStatus) -> Result<Vec<PlateId>> {
        if self.plate(plate_id).is_none() {
            return Err(PlannerError::PlateNotFound { id: plate_id });
        }

        let mut changed = Vec::new();
        for plate in &mut self.plates {
            let before = plate.status();
            if plate.id == plate_id {
                plate.apply_status(status);
            } else if status == PlateStatus::Printing && plate.printing {
                plate.apply_status(PlateStatus::Queued);
            }
            if plate.status() != before {
                changed.push(plate.id);
            }
        }
        Ok(changed)
    }

    /// Computes the print plan for the plates not yet printed.
    pub fn print_plan(&self) -> PrintPlan {
        scheduler::plan(PlanInput::from(self))
    }
}
