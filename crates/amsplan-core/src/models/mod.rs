//! Data models for projects, colors, plates and print plans.
//!
//! This module contains the domain models of the print planner. A
//! [`Project`] owns its [`Color`]s and [`Plate`]s together with the set of
//! colors currently loaded in the AMS. The scheduling engine in
//! [`crate::scheduler`] reads a project snapshot and produces a
//! [`PrintPlan`], which is a pure value and never written back.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! # State Transitions
//!
//! Plate status changes go through [`Project::set_plate_status`], which
//! enforces the rule that at most one plate per project is printing and that
//! a printed plate is never printing at the same time. Color removal goes
//! through [`Project::remove_color`], which refuses to drop colors still
//! required by plates unless forced, and cascades otherwise.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use amsplan_core::models::{Color, Plate, PlateStatus, Project};
//!
//! let mut project = Project::new(1, "Desk organizer");
//! project.colors.push(Color::new(1, "Black", 0));
//! project.plates.push(Plate::new(10, 1, "Base", BTreeSet::from([1]), 0));
//!
//! project.set_plate_status(10, PlateStatus::Printing).unwrap();
//! assert_eq!(project.plate(10).unwrap().status(), PlateStatus::Printing);
//! ```

pub mod color;
pub mod plan;
pub mod plate;
pub mod project;
pub mod summary;

#[cfg(test)]
mod tests;

pub use color::{Color, ColorId};
pub use plan::{PlanStep, PrintPlan};
pub use plate::{Plate, PlateId, PlateStatus};
pub use project::{Project, SortOrder, DEFAULT_SLOT_CAPACITY};
pub use summary::ProjectSummary;
