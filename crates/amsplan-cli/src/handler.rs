//! Command handlers: run a command against the planner and render the result.

use amsplan_core::{
    display::{
        CreateResult, DeleteResult, OperationStatus, PlanReport, PlateView, UpdateResult,
    },
    params::{Id, UpdatePlate, UpdateProject},
    Planner, PlannerError, Project,
};
use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::{
    cli::{
        ColorCommands, ExportProjectArgs, LoadedArgs, PlanArgs, PlateCommands, ProjectCommands,
    },
    renderer::TerminalRenderer,
};

/// Runs CLI commands and renders their output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self
                    .planner
                    .create_project(&args.into())
                    .await
                    .context("Failed to create project")?;
                self.renderer.render(&CreateResult::new(project).to_string())
            }
            ProjectCommands::List => self.list_projects().await,
            ProjectCommands::Show(args) => {
                let id: Id = args.into();
                let project = self
                    .planner
                    .get_project(&id)
                    .await?
                    .ok_or(PlannerError::ProjectNotFound { id: id.id })?;
                self.renderer.render(&project.to_string())
            }
            ProjectCommands::Configure(args) => {
                let params: UpdateProject = args.into();
                let changes = project_changes(&params);
                let project = self
                    .planner
                    .update_project(&params)
                    .await
                    .context("Failed to update project")?
                    .ok_or(PlannerError::ProjectNotFound { id: params.id })?;
                self.renderer
                    .render(&UpdateResult::with_changes(project, changes).to_string())
            }
            ProjectCommands::Delete(args) => {
                let id = args.id;
                let project = self
                    .planner
                    .delete_project(&args.into())
                    .await
                    .context("Pass --confirm to delete a project")?
                    .ok_or(PlannerError::ProjectNotFound { id })?;
                self.renderer.render(&DeleteResult::new(project).to_string())
            }
            ProjectCommands::Export(args) => self.export_project(args).await,
            ProjectCommands::Import(args) => {
                let project = self
                    .planner
                    .import_project(&args.into())
                    .await
                    .context("Failed to import project")?;
                self.renderer.render(&CreateResult::new(project).to_string())
            }
        }
    }

    pub async fn handle_color_command(&self, command: ColorCommands) -> Result<()> {
        match command {
            ColorCommands::Add(args) => {
                let color = self
                    .planner
                    .add_color(&args.into())
                    .await
                    .context("Failed to add color")?;
                self.renderer.render(&CreateResult::new(color).to_string())
            }
            ColorCommands::Rename(args) => {
                let name = args.name.trim().to_string();
                let color = self
                    .planner
                    .rename_color(&args.into())
                    .await
                    .context("Failed to rename color")?;
                let changes = vec![format!("Renamed to {name}")];
                self.renderer
                    .render(&UpdateResult::with_changes(color, changes).to_string())
            }
            ColorCommands::Remove(args) => {
                let color = match self.planner.remove_color(&args.into()).await {
                    Ok(color) => color,
                    Err(e @ PlannerError::ColorInUse { .. }) => {
                        return Err(anyhow!(e).context(
                            "Color is still in use; pass --force to remove it from those plates",
                        ));
                    }
                    Err(e) => return Err(e).context("Failed to remove color"),
                };
                self.renderer.render(&DeleteResult::new(color).to_string())
            }
        }
    }

    pub async fn handle_plate_command(&self, command: PlateCommands) -> Result<()> {
        match command {
            PlateCommands::Add(args) => {
                let plate = self
                    .planner
                    .add_plate(&args.into())
                    .await
                    .context("Failed to add plate")?;
                let project = self.project(plate.project_id).await?;
                let view = PlateView {
                    plate: &plate,
                    colors: &project.colors,
                };
                self.renderer.render(&CreateResult::new(view).to_string())
            }
            PlateCommands::Update(args) => {
                let params: UpdatePlate = args.into();
                let changes = plate_changes(&params);
                let plate = self
                    .planner
                    .update_plate(&params)
                    .await
                    .context("Failed to update plate")?;
                let project = self.project(plate.project_id).await?;
                let view = PlateView {
                    plate: &plate,
                    colors: &project.colors,
                };
                self.renderer
                    .render(&UpdateResult::with_changes(view, changes).to_string())
            }
            PlateCommands::Status(args) => {
                let id = args.id;
                let project = self
                    .planner
                    .set_plate_status(&args.into())
                    .await
                    .context("Failed to change plate status")?;
                let plate = project
                    .plate(id)
                    .ok_or(PlannerError::PlateNotFound { id })?;
                let status = OperationStatus::success(format!(
                    "Plate {} is now {}",
                    plate.id,
                    plate.status()
                ));
                let view = PlateView {
                    plate,
                    colors: &project.colors,
                };
                self.renderer.render(&format!("{status}\n{view}"))
            }
            PlateCommands::Show(args) => {
                let id: Id = args.into();
                let plate = self
                    .planner
                    .get_plate(&id)
                    .await?
                    .ok_or(PlannerError::PlateNotFound { id: id.id })?;
                let project = self.project(plate.project_id).await?;
                let view = PlateView {
                    plate: &plate,
                    colors: &project.colors,
                };
                self.renderer.render(&view.to_string())
            }
            PlateCommands::Remove(args) => {
                let plate = self
                    .planner
                    .remove_plate(&args.into())
                    .await
                    .context("Failed to remove plate")?;
                self.renderer.render(&DeleteResult::new(plate).to_string())
            }
        }
    }

    pub async fn set_loaded_colors(&self, args: LoadedArgs) -> Result<()> {
        let project = self
            .planner
            .set_loaded_colors(&args.into())
            .await
            .context("Failed to record loaded colors")?;

        let names: Vec<&str> = project
            .loaded_colors
            .iter()
            .filter_map(|id| project.color_name(*id))
            .collect();
        let message = if names.is_empty() {
            format!("AMS of project {} is now empty", project.id)
        } else {
            format!("AMS of project {} now holds {}", project.id, names.join(", "))
        };
        self.renderer.render(&OperationStatus::success(message).to_string())
    }

    pub async fn print_plan(&self, args: PlanArgs) -> Result<()> {
        let id: Id = (&args).into();
        let (project, plan) = self
            .planner
            .project_with_plan(&id)
            .await
            .context("Failed to compute print plan")?;
        debug!("Rendering plan for project {}", project.id);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }
        self.renderer
            .render(&PlanReport::new(plan, project.colors).to_string())
    }

    pub async fn list_projects(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_projects()
            .await
            .context("Failed to list projects")?;
        self.renderer.render(&summaries.to_string())
    }

    async fn export_project(&self, args: ExportProjectArgs) -> Result<()> {
        let json = self
            .planner
            .export_project(&Id { id: args.id })
            .await
            .context("Failed to export project")?;

        match args.output {
            Some(path) => {
                tokio::fs::write(&path, json)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let message = format!("Exported project {} to {}", args.id, path.display());
                self.renderer.render(&OperationStatus::success(message).to_string())
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    async fn project(&self, id: u64) -> Result<Project> {
        self.planner
            .get_project(&Id { id })
            .await?
            .ok_or_else(|| PlannerError::ProjectNotFound { id }.into())
    }
}

fn project_changes(params: &UpdateProject) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(name) = &params.name {
        changes.push(format!("Renamed to {}", name.trim()));
    }
    if let Some(slots) = params.slot_capacity {
        changes.push(format!("Set AMS slots to {slots}"));
    }
    if let Some(order) = params.sort_order {
        changes.push(format!("Set sort order to {order}"));
    }
    changes
}

fn plate_changes(params: &UpdatePlate) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(name) = &params.name {
        changes.push(format!("Renamed to {}", name.trim()));
    }
    if let Some(colors) = &params.colors {
        changes.push(format!("Replaced colors ({} now)", colors.len()));
    }
    if let Some(minutes) = params.estimated_minutes {
        changes.push(format!("Set estimated time to {} minutes", minutes.max(0)));
    }
    changes
}
