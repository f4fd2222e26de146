//! Core library for the AMS print planner.
//!
//! A project groups the plates of one multi-color print job, the colors they
//! use and the colors currently loaded in an automatic material system (AMS)
//! with a fixed number of slots. This crate stores projects in SQLite and
//! orders the unprinted plates so that as few filament swaps as possible are
//! needed, reporting for each plate which filaments to unload and load.
//!
//! # Layers
//!
//! - [`scheduler`]: The pure, synchronous planning engine
//! - [`models`]: Domain types and the state rules for plates and colors
//! - [`db`]: SQLite persistence
//! - [`planner`]: Async facade used by interfaces
//! - [`display`]: Markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use amsplan_core::{
//!     display::PlanReport,
//!     params::{AddColor, AddPlate, CreateProject, Id},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("amsplan.db"))
//!     .build()
//!     .await?;
//!
//! let project = planner
//!     .create_project(&CreateProject {
//!         name: "Figurine".to_string(),
//!         slot_capacity: Some(4),
//!         sort_order: None,
//!     })
//!     .await?;
//! let red = planner
//!     .add_color(&AddColor { project_id: project.id, name: "Red".to_string() })
//!     .await?;
//! planner
//!     .add_plate(&AddPlate {
//!         project_id: project.id,
//!         name: "Cape".to_string(),
//!         colors: vec![red.id],
//!         estimated_minutes: Some(45),
//!     })
//!     .await?;
//!
//! let (project, plan) = planner.project_with_plan(&Id { id: project.id }).await?;
//! println!("{}", PlanReport::new(plan, project.colors));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod scheduler;

pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, PlanReport, ProjectSummaries, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use models::{
    Color, ColorId, PlanStep, Plate, PlateId, PlateStatus, PrintPlan, Project, ProjectSummary,
    SortOrder,
};
pub use planner::{Planner, PlannerBuilder};
pub use scheduler::PlanInput;
