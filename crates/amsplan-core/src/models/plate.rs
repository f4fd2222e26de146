//! Plates: single print jobs with a set of required colors.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::ColorId;

/// Identifier of a plate.
pub type PlateId = u64;

/// A single print job requiring a specific set of colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plate {
    /// Unique identifier for the plate
    pub id: PlateId,

    /// ID of the owning project
    pub project_id: u64,

    /// Name of the plate as shown to the user
    pub name: String,

    /// Colors the plate needs loaded while printing; may be empty
    #[serde(default)]
    pub colors: BTreeSet<ColorId>,

    /// Estimated print duration in minutes
    #[serde(default)]
    pub estimated_minutes: u32,

    /// Whether the plate has finished printing
    #[serde(default)]
    pub printed: bool,

    /// Whether the plate is on the printer right now
    #[serde(default)]
    pub printing: bool,

    /// Order of the plate within the project (0-indexed)
    pub position: u32,
}

impl Plate {
    /// Creates a queued plate.
    pub fn new(
        id: PlateId,
        project_id: u64,
        name: impl Into<String>,
        colors: BTreeSet<ColorId>,
        estimated_minutes: u32,
    ) -> Self {
        Self {
            id,
            project_id,
            name: name.into(),
            colors,
            estimated_minutes,
            printed: false,
            printing: false,
            position: 0,
        }
    }

    /// Current lifecycle status derived from the `printed`/`printing` flags.
    pub fn status(&self) -> PlateStatus {
        if self.printed {
            PlateStatus::Printed
        } else if self.printing {
            PlateStatus::Printing
        } else {
            PlateStatus::Queued
        }
    }

    /// Sets both flags from a status. Callers wanting the one-printing-plate
    /// rule go through [`super::Project::set_plate_status`].
    pub(crate) fn apply_status(&mut self, status: PlateStatus) {
        self.printed = status == PlateStatus::Printed;
        self.printing = status == PlateStatus::Printing;
    }

    /// True when the plate needs more colors than the AMS can hold at once.
    pub fn exceeds_capacity(&self, capacity: usize) -> bool {
        self.colors.len() > capacity
    }
}

/// Lifecycle of a plate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlateStatus {
    /// Waiting to be printed
    #[default]
    Queued,

    /// On the printer
    Printing,

    /// Finished
    Printed,
}

impl FromStr for PlateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "queued" | "todo" => Ok(PlateStatus::Queued),
            "printing" => Ok(PlateStatus::Printing),
            "printed" | "done" => Ok(PlateStatus::Printed),
            _ => Err(format!("Invalid plate status: {s}")),
        }
    }
}

impl PlateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlateStatus::Queued => "queued",
            PlateStatus::Printing => "printing",
            PlateStatus::Printed => "printed",
        }
    }

    /// Get status with a leading icon for list output.
    ///
    /// - `✓ Printed`
    /// - `➤ Printing`
    /// - `○ Queued`
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlateStatus::Printed => "✓ Printed",
            PlateStatus::Printing => "➤ Printing",
            PlateStatus::Queued => "○ Queued",
        }
    }
}

impl fmt::Display for PlateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
