//! Project operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::ProjectSummaries,
    error::{PlannerError, Result},
    models::{PrintPlan, Project},
    params::{CreateProject, DeleteProject, Id, ImportProject, SetLoadedColors, UpdateProject},
};

impl Planner {
    /// Creates a new, empty project.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let (name, slot_capacity, sort_order) = params.validate()?;
        self.with_database(move |db| db.create_project(&name, slot_capacity, sort_order))
            .await
    }

    /// Retrieves a project with its colors and plates.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let id = params.id;
        self.with_database(move |db| db.get_project(id)).await
    }

    /// Lists all projects as summaries.
    pub async fn list_projects(&self) -> Result<ProjectSummaries> {
        let summaries = self.with_database(|db| db.list_project_summaries()).await?;
        Ok(ProjectSummaries(summaries))
    }

    /// Changes project settings. Returns `None` if the project doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when nothing would change or a
    /// value is invalid.
    pub async fn update_project(&self, params: &UpdateProject) -> Result<Option<Project>> {
        params.validate()?;
        if !params.has_changes() {
            return Err(PlannerError::invalid_input("project")
                .with_reason("nothing to update; pass a name, slot count or sort order"));
        }

        let UpdateProject {
            id,
            name,
            slot_capacity,
            sort_order,
        } = params.clone();
        let name = name.map(|n| n.trim().to_string());
        self.with_database(move |db| db.update_project(id, name.as_deref(), slot_capacity, sort_order))
            .await
    }

    /// Permanently deletes a project with all its colors and plates.
    ///
    /// Requires `confirmed`; returns the deleted project, or `None` if it
    /// didn't exist.
    pub async fn delete_project(&self, params: &DeleteProject) -> Result<Option<Project>> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed")
                .with_reason("deleting a project cannot be undone; confirm to proceed"));
        }

        let id = params.id;
        self.with_database(move |db| db.delete_project(id)).await
    }

    /// Records which colors are in the AMS right now.
    pub async fn set_loaded_colors(&self, params: &SetLoadedColors) -> Result<Project> {
        let project_id = params.project_id;
        let colors = params.colors.clone();
        self.with_database(move |db| db.set_loaded_colors(project_id, &colors))
            .await
    }

    /// Computes the print plan for a project's unprinted plates.
    ///
    /// The plan is derived from the stored snapshot and never stored itself.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ProjectNotFound` if the project doesn't exist.
    pub async fn print_plan(&self, params: &Id) -> Result<PrintPlan> {
        let (_, plan) = self.project_with_plan(params).await?;
        Ok(plan)
    }

    /// Loads a project and computes its print plan in one round trip.
    pub async fn project_with_plan(&self, params: &Id) -> Result<(Project, PrintPlan)> {
        let id = params.id;
        let (project, plan) = self
            .with_database(move |db| {
                let project = db
                    .get_project(id)?
                    .ok_or(PlannerError::ProjectNotFound { id })?;
                let plan = project.print_plan();
                Ok((project, plan))
            })
            .await?;

        info!(
            "Project {} plan: {} plates, {} swaps",
            project.id,
            plan.len(),
            plan.total_swaps
        );
        Ok((project, plan))
    }

    /// Serializes a project to pretty-printed JSON.
    pub async fn export_project(&self, params: &Id) -> Result<String> {
        let id = params.id;
        let project = self
            .get_project(params)
            .await?
            .ok_or(PlannerError::ProjectNotFound { id })?;
        Ok(serde_json::to_string_pretty(&project)?)
    }

    /// Imports a project previously written by [`Planner::export_project`].
    /// The copy gets fresh ids.
    pub async fn import_project(&self, params: &ImportProject) -> Result<Project> {
        let path = params.path.clone();
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PlannerError::FileSystem { path, source: e })?;
        let source: Project = serde_json::from_str(&contents)?;

        self.with_database(move |db| db.import_project(&source)).await
    }
}
