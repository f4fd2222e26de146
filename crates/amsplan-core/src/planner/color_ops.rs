//! Color operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::Color,
    params::{AddColor, RemoveColor, RenameColor},
};

impl Planner {
    /// Declares a new color in a project.
    pub async fn add_color(&self, params: &AddColor) -> Result<Color> {
        let name = params.validate()?;
        let project_id = params.project_id;
        self.with_database(move |db| db.add_color(project_id, &name))
            .await
    }

    /// Renames a color without touching the plates that use it.
    pub async fn rename_color(&self, params: &RenameColor) -> Result<Color> {
        let name = params.validate()?;
        let id = params.id;
        self.with_database(move |db| db.rename_color(id, &name)).await
    }

    /// Removes a color.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ColorInUse` while plates require the color and
    /// `force` is not set.
    pub async fn remove_color(&self, params: &RemoveColor) -> Result<Color> {
        let (id, force) = (params.id, params.force);
        self.with_database(move |db| db.remove_color(id, force))
            .await
    }
}
