//! Command-line argument types using clap.
//!
//! Each command has its own argument struct with clap derives and a `From`
//! conversion into the matching core parameter type, keeping clap out of
//! `amsplan-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use amsplan_core::{models::ColorId, params::*, PlateStatus, SortOrder};
use clap::{Args, Subcommand, ValueEnum};

// ============================================================================
// Projects
// ============================================================================

/// Create a new project
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Name of the project
    pub name: String,
    /// Number of filament slots in the AMS (default 4)
    #[arg(short, long)]
    pub slots: Option<u32>,
    /// Prefer shorter (asc) or longer (desc) plates when choices are equal
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            name: val.name,
            slot_capacity: val.slots,
            sort_order: val.sort.map(Into::into),
        }
    }
}

/// Show a project with its colors and plates
#[derive(Args)]
pub struct ShowProjectArgs {
    #[arg(help = "Unique identifier of the project to show")]
    pub id: u64,
}

impl From<ShowProjectArgs> for Id {
    fn from(val: ShowProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change a project's name, slot count or sort order
#[derive(Args)]
pub struct ConfigureProjectArgs {
    #[arg(help = "Unique identifier of the project to change")]
    pub id: u64,
    /// New project name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New number of AMS slots
    #[arg(short, long)]
    pub slots: Option<u32>,
    /// New duration preference for equal choices
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
}

impl From<ConfigureProjectArgs> for UpdateProject {
    fn from(val: ConfigureProjectArgs) -> Self {
        UpdateProject {
            id: val.id,
            name: val.name,
            slot_capacity: val.slots,
            sort_order: val.sort.map(Into::into),
        }
    }
}

/// Delete a project with all its colors and plates
#[derive(Args)]
pub struct DeleteProjectArgs {
    #[arg(help = "Unique identifier of the project to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteProjectArgs> for DeleteProject {
    fn from(val: DeleteProjectArgs) -> Self {
        DeleteProject {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Export a project as JSON
#[derive(Args)]
pub struct ExportProjectArgs {
    #[arg(help = "Unique identifier of the project to export")]
    pub id: u64,
    /// Write to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Import a project from an exported JSON file
#[derive(Args)]
pub struct ImportProjectArgs {
    /// Path of the exported JSON file
    pub path: PathBuf,
}

impl From<ImportProjectArgs> for ImportProject {
    fn from(val: ImportProjectArgs) -> Self {
        ImportProject { path: val.path }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List all projects
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a project with its colors and plates
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Change a project's name, slot count or sort order
    #[command(alias = "cfg")]
    Configure(ConfigureProjectArgs),
    /// Delete a project permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProjectArgs),
    /// Export a project as JSON
    Export(ExportProjectArgs),
    /// Import a project from an exported JSON file
    Import(ImportProjectArgs),
}

// ============================================================================
// Colors
// ============================================================================

/// Declare a filament color in a project
#[derive(Args)]
pub struct AddColorArgs {
    #[arg(help = "Unique identifier of the project to add the color to")]
    pub project_id: u64,
    /// Display name, e.g. "Galaxy Black"
    pub name: String,
}

impl From<AddColorArgs> for AddColor {
    fn from(val: AddColorArgs) -> Self {
        AddColor {
            project_id: val.project_id,
            name: val.name,
        }
    }
}

/// Rename a color
#[derive(Args)]
pub struct RenameColorArgs {
    #[arg(help = "Unique identifier of the color to rename")]
    pub id: ColorId,
    /// New display name
    pub name: String,
}

impl From<RenameColorArgs> for RenameColor {
    fn from(val: RenameColorArgs) -> Self {
        RenameColor {
            id: val.id,
            name: val.name,
        }
    }
}

/// Remove a color from its project
#[derive(Args)]
pub struct RemoveColorArgs {
    #[arg(help = "Unique identifier of the color to remove")]
    pub id: ColorId,
    /// Also remove the color from plates that still require it
    #[arg(long)]
    pub force: bool,
}

impl From<RemoveColorArgs> for RemoveColor {
    fn from(val: RemoveColorArgs) -> Self {
        RemoveColor {
            id: val.id,
            force: val.force,
        }
    }
}

#[derive(Subcommand)]
pub enum ColorCommands {
    /// Declare a filament color in a project
    #[command(alias = "a")]
    Add(AddColorArgs),
    /// Rename a color
    #[command(alias = "mv")]
    Rename(RenameColorArgs),
    /// Remove a color
    #[command(alias = "rm")]
    Remove(RemoveColorArgs),
}

// ============================================================================
// Plates
// ============================================================================

/// Add a plate to a project
#[derive(Args)]
pub struct AddPlateArgs {
    #[arg(help = "Unique identifier of the project to add the plate to")]
    pub project_id: u64,
    /// Name of the plate
    pub name: String,
    /// Color IDs the plate needs, as a comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub colors: Vec<ColorId>,
    /// Estimated print time in minutes
    #[arg(short, long, allow_negative_numbers = true)]
    pub minutes: Option<i64>,
}

impl From<AddPlateArgs> for AddPlate {
    fn from(val: AddPlateArgs) -> Self {
        AddPlate {
            project_id: val.project_id,
            name: val.name,
            colors: val.colors,
            estimated_minutes: val.minutes,
        }
    }
}

/// Change a plate's name, colors or estimated time
#[derive(Args)]
pub struct UpdatePlateArgs {
    #[arg(help = "Unique identifier of the plate to update")]
    pub id: u64,
    /// New name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Replacement color IDs as a comma-separated list; give no value to
    /// clear them
    #[arg(short, long, value_delimiter = ',', num_args = 0..)]
    pub colors: Option<Vec<ColorId>>,
    /// New estimated print time in minutes
    #[arg(short, long, allow_negative_numbers = true)]
    pub minutes: Option<i64>,
}

impl From<UpdatePlateArgs> for UpdatePlate {
    fn from(val: UpdatePlateArgs) -> Self {
        UpdatePlate {
            id: val.id,
            name: val.name,
            colors: val.colors,
            estimated_minutes: val.minutes,
        }
    }
}

/// Move a plate to queued, printing or printed
#[derive(Args)]
pub struct PlateStatusArgs {
    #[arg(help = "Unique identifier of the plate")]
    pub id: u64,
    #[arg(value_enum, help = "New status of the plate")]
    pub status: PlateStatusArg,
}

impl From<PlateStatusArgs> for SetPlateStatus {
    fn from(val: PlateStatusArgs) -> Self {
        SetPlateStatus {
            id: val.id,
            status: val.status.into(),
        }
    }
}

/// Show a single plate
#[derive(Args)]
pub struct ShowPlateArgs {
    #[arg(help = "Unique identifier of the plate to show")]
    pub id: u64,
}

impl From<ShowPlateArgs> for Id {
    fn from(val: ShowPlateArgs) -> Self {
        Id { id: val.id }
    }
}

/// Remove a plate from its project
#[derive(Args)]
pub struct RemovePlateArgs {
    #[arg(help = "Unique identifier of the plate to remove")]
    pub id: u64,
}

impl From<RemovePlateArgs> for Id {
    fn from(val: RemovePlateArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum PlateCommands {
    /// Add a plate to a project
    #[command(alias = "a")]
    Add(AddPlateArgs),
    /// Change a plate's name, colors or estimated time
    #[command(alias = "u")]
    Update(UpdatePlateArgs),
    /// Move a plate to queued, printing or printed
    #[command(alias = "st")]
    Status(PlateStatusArgs),
    /// Show a single plate
    #[command(alias = "s")]
    Show(ShowPlateArgs),
    /// Remove a plate
    #[command(alias = "rm")]
    Remove(RemovePlateArgs),
}

// ============================================================================
// Loaded colors and planning
// ============================================================================

/// Record which colors are loaded in the AMS
///
/// Replaces the whole set. Without `--colors` the AMS is recorded as empty.
#[derive(Args)]
pub struct LoadedArgs {
    #[arg(help = "Unique identifier of the project")]
    pub project_id: u64,
    /// Loaded color IDs as a comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub colors: Vec<ColorId>,
}

impl From<LoadedArgs> for SetLoadedColors {
    fn from(val: LoadedArgs) -> Self {
        SetLoadedColors {
            project_id: val.project_id,
            colors: val.colors,
        }
    }
}

/// Compute the print order for a project's remaining plates
#[derive(Args)]
pub struct PlanArgs {
    #[arg(help = "Unique identifier of the project to plan")]
    pub project_id: u64,
    /// Print the plan as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&PlanArgs> for Id {
    fn from(val: &PlanArgs) -> Self {
        Id { id: val.project_id }
    }
}

// ============================================================================
// Value enums
// ============================================================================

/// Plate lifecycle states accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PlateStatusArg {
    /// Waiting to be printed
    #[value(alias = "todo")]
    Queued,
    /// On the printer now
    Printing,
    /// Finished
    #[value(alias = "done")]
    Printed,
}

impl From<PlateStatusArg> for PlateStatus {
    fn from(val: PlateStatusArg) -> Self {
        match val {
            PlateStatusArg::Queued => PlateStatus::Queued,
            PlateStatusArg::Printing => PlateStatus::Printing,
            PlateStatusArg::Printed => PlateStatus::Printed,
        }
    }
}

/// Duration preference accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SortArg {
    /// Shorter plates first
    #[value(alias = "ascending")]
    Asc,
    /// Longer plates first
    #[value(alias = "descending")]
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}
