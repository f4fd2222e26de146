//! Print plan output of the scheduling engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{ColorId, PlateId};

/// One plate of the plan together with the AMS change it causes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanStep {
    /// ID of the plate printed at this step
    pub plate_id: PlateId,

    /// Name of the plate printed at this step
    pub plate_name: String,

    /// Colors the plate requires
    pub required: BTreeSet<ColorId>,

    /// AMS contents before the step
    pub before: BTreeSet<ColorId>,

    /// AMS contents after the step
    pub after: BTreeSet<ColorId>,

    /// Colors unloaded for this step
    pub removed: BTreeSet<ColorId>,

    /// Colors loaded for this step
    pub added: BTreeSet<ColorId>,

    /// Number of swaps, always `added.len()`
    pub swaps: usize,

    /// The plate needs more colors than there are slots and will need a
    /// manual mid-print filament swap
    pub requires_pause_and_filament_swap: bool,

    /// Estimated print duration echoed from the plate
    pub estimated_minutes: u32,
}

/// Ordered print sequence with its total swap count.
///
/// A plan is a computed value: it is rebuilt from the project whenever the
/// inputs change and is never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintPlan {
    pub steps: Vec<PlanStep>,
    pub total_swaps: usize,
}

impl PrintPlan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Sum of the estimated durations of all steps.
    pub fn total_minutes(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.estimated_minutes)).sum()
    }

    /// Number of steps flagged for a manual filament swap.
    pub fn pause_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.requires_pause_and_filament_swap)
            .count()
    }
}
