//! High-level planner API for projects, colors, plates and print plans.
//!
//! [`Planner`] is the entry point for interfaces. It validates parameters,
//! runs store operations on a blocking thread and computes print plans from
//! the stored project snapshot.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │    Database     │    │    scheduler    │
//! │ (params, async) │───▶│ (SQLite, rules) │───▶│  (print order)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`project_ops`]: Project, loaded color, plan and import/export operations
//! - [`color_ops`]: Color operations
//! - [`plate_ops`]: Plate operations and status transitions
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use amsplan_core::{
//!     params::{AddColor, AddPlate, CreateProject, Id},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/amsplan.db"))
//!     .build()
//!     .await?;
//!
//! let project = planner
//!     .create_project(&CreateProject {
//!         name: "Chess set".to_string(),
//!         slot_capacity: Some(4),
//!         sort_order: None,
//!     })
//!     .await?;
//!
//! let black = planner
//!     .add_color(&AddColor { project_id: project.id, name: "Black".to_string() })
//!     .await?;
//!
//! planner
//!     .add_plate(&AddPlate {
//!         project_id: project.id,
//!         name: "Pawns".to_string(),
//!         colors: vec![black.id],
//!         estimated_minutes: Some(95),
//!     })
//!     .await?;
//!
//! let plan = planner.print_plan(&Id { id: project.id }).await?;
//! println!("{} swaps", plan.total_swaps);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
};

pub mod builder;
pub mod color_ops;
pub mod plate_ops;
pub mod project_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing projects and computing print plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(PlannerError::join)?
    }
}
