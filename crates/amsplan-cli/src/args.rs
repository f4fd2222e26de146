use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ColorCommands, LoadedArgs, PlanArgs, PlateCommands, ProjectCommands};

/// Plan the print order of multi-color plates sharing an AMS
///
/// A project holds the plates of one print job, the filament colors they
/// need and the colors currently loaded in the AMS. `amsplan plan` orders
/// the plates that are left so that as few filament swaps as possible are
/// needed, and tells you what to unload and load before each plate.
#[derive(Parser)]
#[command(version, about, name = "amsplan")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/amsplan/amsplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, projects are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage a project's filament colors
    #[command(alias = "c")]
    Color {
        #[command(subcommand)]
        command: ColorCommands,
    },
    /// Manage plates within projects
    #[command(alias = "pl")]
    Plate {
        #[command(subcommand)]
        command: PlateCommands,
    },
    /// Record which colors are loaded in the AMS right now
    #[command(alias = "l")]
    Loaded(LoadedArgs),
    /// Compute the print order for a project's remaining plates
    Plan(PlanArgs),
}
