//! amsplan command-line application
//!
//! Records projects, colors and plates in a local SQLite database and prints
//! the order in which to print the remaining plates.

mod args;
mod cli;
mod handler;
mod renderer;

use amsplan_core::PlannerBuilder;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handler::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));

    info!("amsplan started");

    match command {
        Some(Project { command }) => cli.handle_project_command(command).await,
        Some(Color { command }) => cli.handle_color_command(command).await,
        Some(Plate { command }) => cli.handle_plate_command(command).await,
        Some(Loaded(args)) => cli.set_loaded_colors(args).await,
        Some(Plan(args)) => cli.print_plan(args).await,
        None => cli.list_projects().await,
    }
}
