//! Swap-minimizing print order engine.
//!
//! The engine takes a snapshot of the unprinted plates, the colors loaded in
//! the AMS, the slot capacity and a duration sort preference, and returns a
//! [`PrintPlan`]. It is a greedy heuristic: at every step it prints the plate
//! needing the fewest new colors, then keeps the loaded colors the remaining
//! plates need most.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │    sequencer     │───▶│   reallocator    │───▶│    frequency     │
//! │ (pick next plate)│    │ (next AMS state) │    │ (color counts)   │
//! └──────────────────┘    └──────────────────┘    └──────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`frequency`]: how many plates require each color
//! - [`reallocator`]: which colors stay loaded after a plate is chosen
//! - [`sequencer`]: the plate selection loop
//!
//! The engine never fails and never mutates its input. Calling it twice on
//! the same input yields the same plan.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use amsplan_core::{
//!     models::{Plate, SortOrder},
//!     scheduler::{plan, PlanInput},
//! };
//!
//! let plates = vec![
//!     Plate::new(1, 1, "P1", BTreeSet::from([1, 2]), 0),
//!     Plate::new(2, 1, "P2", BTreeSet::from([2, 3]), 0),
//! ];
//! let input = PlanInput {
//!     plates: plates.iter().collect(),
//!     loaded: BTreeSet::new(),
//!     capacity: 2,
//!     sort_order: SortOrder::Ascending,
//! };
//!
//! let plan = plan(input);
//! assert_eq!(plan.total_swaps, 3);
//! ```

use std::collections::BTreeSet;

pub mod frequency;
pub mod reallocator;
pub mod sequencer;


pub use frequency::{color_frequency, ColorFrequency};
pub use reallocator::next_loaded;
pub use sequencer::plan;

use crate::models::{ColorId, Plate, Project, SortOrder};

/// Everything the engine reads. Plates are borrowed, never modified.
#[derive(Debug, Clone)]
pub struct PlanInput<'a> {
    /// Plates still to print, in schedule order
    pub plates: Vec<&'a Plate>,

    /// AMS contents before the first step
    pub loaded: BTreeSet<ColorId>,

    /// Number of AMS slots; must be positive
    pub capacity: usize,

    /// Direction of the duration tie-break
    pub sort_order: SortOrder,
}

impl<'a> From<&'a Project> for PlanInput<'a> {
    /// Builds engine input from a project: printed plates are skipped,
    /// loaded colors are limited to colors the project still declares and a
    /// zero capacity falls back to the default.
    fn from(project: &'a Project) -> Self {
        let declared: BTreeSet<ColorId> = project.colors.iter().map(|c| c.id).collect();
        let loaded = project
            .loaded_colors
            .intersection(&declared)
            .copied()
            .collect();

        let mut plates: Vec<&Plate> = project.pending_plates().collect();
        plates.sort_by_key(|p| p.position);

        Self {
            plates,
            loaded,
            capacity: project.capacity(),
            sort_order: project.sort_order,
        }
    }
}
