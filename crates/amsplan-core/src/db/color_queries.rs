//! Color operations.

use jiff::Timestamp;
use log::debug;
use rusqlite::params;

use super::rows::{project_of_color, require_project, touch_project};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Color, ColorId},
};

const NEXT_COLOR_ORDER_SQL: &str =
    "SELECT COALESCE(MAX(color_order), -1) + 1 FROM colors WHERE project_id = ?1";
const INSERT_COLOR_SQL: &str =
    "INSERT INTO colors (project_id, name, color_order) VALUES (?1, ?2, ?3)";
const RENAME_COLOR_SQL: &str = "UPDATE colors SET name = ?1 WHERE id = ?2";
const DELETE_COLOR_SQL: &str = "DELETE FROM colors WHERE id = ?1";
const UPDATE_COLOR_ORDER_SQL: &str = "UPDATE colors SET color_order = ?1 WHERE id = ?2";

impl super::Database {
    /// Declares a new color at the end of the project's color list.
    pub fn add_color(&mut self, project_id: u64, name: &str) -> Result<Color> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        require_project(&tx, project_id)?;

        let position: i64 = tx
            .query_row(NEXT_COLOR_ORDER_SQL, params![project_id as i64], |row| row.get(0))
            .db_context("Failed to get next color order")?;

        tx.execute(INSERT_COLOR_SQL, params![project_id as i64, name, position])
            .db_context("Failed to insert color")?;
        let id = tx.last_insert_rowid() as u64;

        touch_project(&tx, project_id, &Timestamp::now().to_string())?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Added color {id} ({name}) to project {project_id}");
        Ok(Color::new(id, name, position as u32))
    }

    /// Renames a color. Its id, and so every reference to it, is unchanged.
    pub fn rename_color(&mut self, id: ColorId, name: &str) -> Result<Color> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_id = project_of_color(&tx, id)?;
        tx.execute(RENAME_COLOR_SQL, params![name, id as i64])
            .db_context("Failed to rename color")?;
        touch_project(&tx, project_id, &Timestamp::now().to_string())?;

        let color = require_project(&tx, project_id)?
            .color(id)
            .cloned()
            .ok_or(PlannerError::ColorNotFound { id })?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(color)
    }

    /// Removes a color from its project.
    ///
    /// Refused with `ColorInUse` while plates still require the color,
    /// unless `force` is set. Plate and loaded-color references are removed
    /// by the foreign key cascade.
    pub fn remove_color(&mut self, id: ColorId, force: bool) -> Result<Color> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_id = project_of_color(&tx, id)?;
        let mut project = require_project(&tx, project_id)?;
        let removed = project.remove_color(id, force)?;

        tx.execute(DELETE_COLOR_SQL, params![id as i64])
            .db_context("Failed to delete color")?;
        for color in &project.colors {
            tx.execute(
                UPDATE_COLOR_ORDER_SQL,
                params![color.position as i64, color.id as i64],
            )
            .db_context("Failed to reorder colors")?;
        }

        touch_project(&tx, project_id, &Timestamp::now().to_string())?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(removed)
    }
}
