//! Plate operations for the Planner.

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::{Plate, Project},
    params::{AddPlate, Id, SetPlateStatus, UpdatePlate},
};

impl Planner {
    /// Adds a queued plate to a project.
    pub async fn add_plate(&self, params: &AddPlate) -> Result<Plate> {
        let (name, minutes) = params.validate()?;
        let project_id = params.project_id;
        let colors = params.colors.clone();
        self.with_database(move |db| db.add_plate(project_id, &name, &colors, minutes))
            .await
    }

    /// Retrieves a single plate.
    pub async fn get_plate(&self, params: &Id) -> Result<Option<Plate>> {
        let id = params.id;
        self.with_database(move |db| db.get_plate(id)).await
    }

    /// Edits a plate.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when no field is set.
    pub async fn update_plate(&self, params: &UpdatePlate) -> Result<Plate> {
        let (name, minutes) = params.validate()?;
        if name.is_none() && minutes.is_none() && params.colors.is_none() {
            return Err(PlannerError::invalid_input("plate")
                .with_reason("nothing to update; pass a name, colors or duration"));
        }

        let id = params.id;
        let colors = params.colors.clone();
        self.with_database(move |db| {
            db.update_plate(id, name.as_deref(), colors.as_deref(), minutes)
        })
        .await
    }

    /// Moves a plate to `queued`, `printing` or `printed`.
    ///
    /// Marking a plate as printing clears the printing flag of every other
    /// plate in the project. Returns the updated project.
    pub async fn set_plate_status(&self, params: &SetPlateStatus) -> Result<Project> {
        let (id, status) = (params.id, params.status);
        self.with_database(move |db| db.set_plate_status(id, status))
            .await
    }

    /// Removes a plate from its project.
    pub async fn remove_plate(&self, params: &Id) -> Result<Plate> {
        let id = params.id;
        self.with_database(move |db| db.remove_plate(id)).await
    }
}
