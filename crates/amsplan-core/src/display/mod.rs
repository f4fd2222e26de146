//! Display formatting for projects, plates and print plans.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Contexts that need more than the model itself, such as a list of
//! summaries, a plan with color names or the outcome of an operation, get a
//! wrapper type here. Every formatter writes markdown, which the CLI renders
//! for the terminal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Project, Plan) │───▶│ (PlanReport...) │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers ([`ProjectSummaries`])
//! - [`plan`]: Print plan rendering ([`PlanReport`])
//! - [`results`]: Operation results ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`])
//! - [`status`]: One-line status messages ([`OperationStatus`])
//! - [`datetime`]: Timestamp and duration formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use amsplan_core::{
//!     display::{CreateResult, OperationStatus, UpdateResult},
//!     models::Project,
//! };
//!
//! let project = Project::new(1, "Chess set");
//!
//! let created = CreateResult::new(project.clone()).to_string();
//! assert!(created.contains("Created project with ID: 1"));
//!
//! let changes = vec!["Set AMS slots to 8".to_string()];
//! let updated = UpdateResult::with_changes(project, changes).to_string();
//! assert!(updated.contains("Changes made:"));
//!
//! println!("{}", OperationStatus::success("Loaded colors updated"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod plan;
pub mod results;
pub mod status;

pub use collections::ProjectSummaries;
pub use datetime::{LocalDateTime, Minutes};
pub use models::{ColorNames, PlateView};
pub use plan::PlanReport;
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::OperationStatus;
