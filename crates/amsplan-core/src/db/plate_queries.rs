//! Plate CRUD operations and status transitions.

use std::collections::BTreeSet;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Transaction};

use super::rows::{project_of_plate, require_project, touch_project};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{ColorId, Plate, PlateStatus, Project},
};

const NEXT_PLATE_ORDER_SQL: &str =
    "SELECT COALESCE(MAX(plate_order), -1) + 1 FROM plates WHERE project_id = ?1";
const INSERT_PLATE_SQL: &str = "INSERT INTO plates (project_id, name, estimated_minutes, printed, printing, plate_order) VALUES (?1, ?2, ?3, 0, 0, ?4)";
const INSERT_PLATE_COLOR_SQL: &str =
    "INSERT INTO plate_colors (plate_id, color_id) VALUES (?1, ?2)";
const DELETE_PLATE_COLORS_SQL: &str = "DELETE FROM plate_colors WHERE plate_id = ?1";
const UPDATE_PLATE_SQL: &str = "UPDATE plates SET name = ?1, estimated_minutes = ?2 WHERE id = ?3";
const UPDATE_PLATE_FLAGS_SQL: &str = "UPDATE plates SET printed = ?1, printing = ?2 WHERE id = ?3";
const DELETE_PLATE_SQL: &str = "DELETE FROM plates WHERE id = ?1";
const UPDATE_PLATE_ORDERS_DECREMENT_SQL: &str =
    "UPDATE plates SET plate_order = plate_order - 1 WHERE project_id = ?1 AND plate_order > ?2";

impl super::Database {
    /// Adds a queued plate at the end of the project's schedule.
    pub fn add_plate(
        &mut self,
        project_id: u64,
        name: &str,
        colors: &[ColorId],
        estimated_minutes: u32,
    ) -> Result<Plate> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project = require_project(&tx, project_id)?;
        project.ensure_colors_exist(colors)?;

        let position: i64 = tx
            .query_row(NEXT_PLATE_ORDER_SQL, params![project_id as i64], |row| row.get(0))
            .db_context("Failed to get next plate order")?;

        tx.execute(
            INSERT_PLATE_SQL,
            params![project_id as i64, name, estimated_minutes, position],
        )
        .db_context("Failed to insert plate")?;
        let id = tx.last_insert_rowid() as u64;

        let colors: BTreeSet<ColorId> = colors.iter().copied().collect();
        Self::write_plate_colors(&tx, id, &colors)?;

        touch_project(&tx, project_id, &Timestamp::now().to_string())?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Added plate {id} ({name}) to project {project_id}");
        let mut plate = Plate::new(id, project_id, name, colors, estimated_minutes);
        plate.position = position as u32;
        Ok(plate)
    }

    /// Retrieves a plate by its ID.
    pub fn get_plate(&self, id: u64) -> Result<Option<Plate>> {
        let project_id = match project_of_plate(&self.connection, id) {
            Ok(project_id) => project_id,
            Err(PlannerError::PlateNotFound { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };
        let project = require_project(&self.connection, project_id)?;
        Ok(project.plate(id).cloned())
    }

    /// Edits a plate's name, colors or estimated duration.
    pub fn update_plate(
        &mut self,
        id: u64,
        name: Option<&str>,
        colors: Option<&[ColorId]>,
        estimated_minutes: Option<u32>,
    ) -> Result<Plate> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_id = project_of_plate(&tx, id)?;
        let project = require_project(&tx, project_id)?;
        let mut plate = project
            .plate(id)
            .cloned()
            .ok_or(PlannerError::PlateNotFound { id })?;

        if let Some(name) = name {
            plate.name = name.to_string();
        }
        if let Some(minutes) = estimated_minutes {
            plate.estimated_minutes = minutes;
        }
        tx.execute(
            UPDATE_PLATE_SQL,
            params![&plate.name, plate.estimated_minutes, id as i64],
        )
        .db_context("Failed to update plate")?;

        if let Some(colors) = colors {
            project.ensure_colors_exist(colors)?;
            plate.colors = colors.iter().copied().collect();
            tx.execute(DELETE_PLATE_COLORS_SQL, params![id as i64])
                .db_context("Failed to clear plate colors")?;
            Self::write_plate_colors(&tx, id, &plate.colors)?;
        }

        touch_project(&tx, project_id, &Timestamp::now().to_string())?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(plate)
    }

    /// Moves a plate to a new status, clearing any other printing plate of
    /// the same project. Returns the project as it is after the change.
    pub fn set_plate_status(&mut self, id: u64, status: PlateStatus) -> Result<Project> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_id = project_of_plate(&tx, id)?;
        let mut project = require_project(&tx, project_id)?;
        let changed = project.set_plate_status(id, status)?;

        // Clear flags before setting them so the one-printing index never
        // sees two printing plates.
        let (setting, clearing): (Vec<&Plate>, Vec<&Plate>) = project
            .plates
            .iter()
            .filter(|p| changed.contains(&p.id))
            .partition(|p| p.printing);
        for plate in clearing.into_iter().chain(setting) {
            tx.execute(
                UPDATE_PLATE_FLAGS_SQL,
                params![plate.printed, plate.printing, plate.id as i64],
            )
            .db_context("Failed to update plate status")?;
        }

        let now = Timestamp::now();
        touch_project(&tx, project_id, &now.to_string())?;
        project.updated_at = now;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Plate {id} is now {status} ({} plates changed)", changed.len());
        Ok(project)
    }

    /// Removes a plate and closes the gap in the schedule order.
    pub fn remove_plate(&mut self, id: u64) -> Result<Plate> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_id = project_of_plate(&tx, id)?;
        let plate = require_project(&tx, project_id)?
            .plate(id)
            .cloned()
            .ok_or(PlannerError::PlateNotFound { id })?;

        tx.execute(DELETE_PLATE_SQL, params![id as i64])
            .db_context("Failed to delete plate")?;
        tx.execute(
            UPDATE_PLATE_ORDERS_DECREMENT_SQL,
            params![project_id as i64, plate.position as i64],
        )
        .db_context("Failed to reorder plates")?;

        touch_project(&tx, project_id, &Timestamp::now().to_string())?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(plate)
    }

    fn write_plate_colors(tx: &Transaction, plate_id: u64, colors: &BTreeSet<ColorId>) -> Result<()> {
        for color in colors {
            tx.execute(INSERT_PLATE_COLOR_SQL, params![plate_id as i64, *color as i64])
                .db_context("Failed to insert plate color")?;
        }
        Ok(())
    }
}
