//! Project CRUD operations, loaded colors and import.

use std::collections::{BTreeSet, HashMap};

use jiff::Timestamp;
use log::debug;
use rusqlite::params;

use super::rows::{load_project, require_project, slot_capacity_at, sort_order_at, timestamp_at, touch_project};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{ColorId, Project, ProjectSummary, SortOrder},
    params::{validate_capacity, validate_name},
};

const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (name, slot_capacity, sort_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_PROJECT_SQL: &str =
    "UPDATE projects SET name = ?1, slot_capacity = ?2, sort_order = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";
const SELECT_SUMMARIES_SQL: &str = "SELECT id, name, slot_capacity, sort_order, created_at, updated_at, total_colors, total_plates, printed_plates FROM project_summaries ORDER BY id DESC";
const DELETE_LOADED_SQL: &str = "DELETE FROM loaded_colors WHERE project_id = ?1";
const INSERT_LOADED_SQL: &str = "INSERT INTO loaded_colors (project_id, color_id) VALUES (?1, ?2)";
const INSERT_COLOR_SQL: &str =
    "INSERT INTO colors (project_id, name, color_order) VALUES (?1, ?2, ?3)";
const INSERT_PLATE_SQL: &str = "INSERT INTO plates (project_id, name, estimated_minutes, printed, printing, plate_order) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const INSERT_PLATE_COLOR_SQL: &str =
    "INSERT INTO plate_colors (plate_id, color_id) VALUES (?1, ?2)";

impl super::Database {
    /// Creates an empty project.
    pub fn create_project(
        &mut self,
        name: &str,
        slot_capacity: u32,
        sort_order: SortOrder,
    ) -> Result<Project> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_PROJECT_SQL,
                params![name, slot_capacity, sort_order.as_str(), &now_str, &now_str],
            )
            .db_context("Failed to insert project")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Created project {id} ({name})");

        Ok(Project {
            id,
            name: name.into(),
            slot_capacity,
            sort_order,
            colors: Vec::new(),
            plates: Vec::new(),
            loaded_colors: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a project with its colors, plates and loaded colors.
    pub fn get_project(&self, id: u64) -> Result<Option<Project>> {
        load_project(&self.connection, id)
    }

    /// Lists all projects, most recently created first.
    pub fn list_project_summaries(&self) -> Result<Vec<ProjectSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                let total_plates = row.get::<_, i64>(7)? as u32;
                let printed_plates = row.get::<_, i64>(8)? as u32;
                Ok(ProjectSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    slot_capacity: slot_capacity_at(row, 2)?,
                    sort_order: sort_order_at(row, 3)?,
                    created_at: timestamp_at(row, 4)?,
                    updated_at: timestamp_at(row, 5)?,
                    total_colors: row.get::<_, i64>(6)? as u32,
                    total_plates,
                    printed_plates,
                    pending_plates: total_plates.saturating_sub(printed_plates),
                })
            })
            .db_context("Failed to query projects")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch projects")?;

        Ok(summaries)
    }

    /// Changes a project's name, slot capacity or sort order. Returns `None`
    /// if the project doesn't exist.
    pub fn update_project(
        &mut self,
        id: u64,
        name: Option<&str>,
        slot_capacity: Option<u32>,
        sort_order: Option<SortOrder>,
    ) -> Result<Option<Project>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut project) = load_project(&tx, id)? else {
            return Ok(None);
        };

        if let Some(name) = name {
            project.name = name.to_string();
        }
        if let Some(slots) = slot_capacity {
            project.slot_capacity = slots;
        }
        if let Some(order) = sort_order {
            project.sort_order = order;
        }
        project.updated_at = Timestamp::now();

        tx.execute(
            UPDATE_PROJECT_SQL,
            params![
                &project.name,
                project.slot_capacity,
                project.sort_order.as_str(),
                project.updated_at.to_string(),
                id as i64
            ],
        )
        .db_context("Failed to update project")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(Some(project))
    }

    /// Deletes a project together with its colors and plates. Returns the
    /// deleted project, or `None` if it didn't exist.
    pub fn delete_project(&mut self, id: u64) -> Result<Option<Project>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(project) = load_project(&tx, id)? else {
            return Ok(None);
        };

        tx.execute(DELETE_PROJECT_SQL, params![id as i64])
            .db_context("Failed to delete project")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted project {id}");
        Ok(Some(project))
    }

    /// Replaces the set of colors loaded in the project's AMS.
    ///
    /// Colors must belong to the project. More colors than slots is allowed;
    /// the planner only reads what is there.
    pub fn set_loaded_colors(&mut self, project_id: u64, colors: &[ColorId]) -> Result<Project> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut project = require_project(&tx, project_id)?;
        project.set_loaded_colors(colors.iter().copied().collect())?;

        tx.execute(DELETE_LOADED_SQL, params![project_id as i64])
            .db_context("Failed to clear loaded colors")?;
        for color in &project.loaded_colors {
            tx.execute(INSERT_LOADED_SQL, params![project_id as i64, *color as i64])
                .db_context("Failed to insert loaded color")?;
        }

        let now = Timestamp::now();
        touch_project(&tx, project_id, &now.to_string())?;
        project.updated_at = now;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(project)
    }

    /// Stores a copy of an exported project under fresh ids.
    ///
    /// Color references in plates and in the loaded set are remapped to the
    /// new color ids. The whole import happens in one transaction.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - blank name, zero slot capacity or
    ///   more than one plate still printing
    /// * `PlannerError::ColorNotFound` - a plate or the loaded set names a
    ///   color the project does not declare
    pub fn import_project(&mut self, source: &Project) -> Result<Project> {
        let name = validate_name("name", &source.name)?;
        let slot_capacity = validate_capacity(source.slot_capacity)?;
        source.ensure_colors_exist(&source.loaded_colors)?;
        for plate in &source.plates {
            source.ensure_colors_exist(&plate.colors)?;
        }
        if source.plates.iter().filter(|p| p.printing && !p.printed).count() > 1 {
            return Err(PlannerError::invalid_input("plates")
                .with_reason("more than one plate is marked as printing"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                &name,
                slot_capacity,
                source.sort_order.as_str(),
                &now,
                &now
            ],
        )
        .db_context("Failed to insert project")?;
        let project_id = tx.last_insert_rowid();

        let mut color_ids: HashMap<ColorId, i64> = HashMap::new();
        for (position, color) in source.colors.iter().enumerate() {
            tx.execute(
                INSERT_COLOR_SQL,
                params![project_id, &color.name, position as i64],
            )
            .db_context("Failed to insert color")?;
            color_ids.insert(color.id, tx.last_insert_rowid());
        }

        let mut plates: Vec<_> = source.plates.iter().collect();
        plates.sort_by_key(|p| p.position);
        for (position, plate) in plates.into_iter().enumerate() {
            // Printed wins over printing, matching the model's invariant.
            let printing = plate.printing && !plate.printed;
            tx.execute(
                INSERT_PLATE_SQL,
                params![
                    project_id,
                    &plate.name,
                    plate.estimated_minutes,
                    plate.printed,
                    printing,
                    position as i64
                ],
            )
            .db_context("Failed to insert plate")?;
            let plate_id = tx.last_insert_rowid();
            for color in &plate.colors {
                tx.execute(INSERT_PLATE_COLOR_SQL, params![plate_id, color_ids[color]])
                    .db_context("Failed to insert plate color")?;
            }
        }

        for color in &source.loaded_colors {
            tx.execute(INSERT_LOADED_SQL, params![project_id, color_ids[color]])
                .db_context("Failed to insert loaded color")?;
        }

        let project = require_project(&tx, project_id as u64)?;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Imported project {} as {}", source.id, project.id);
        Ok(project)
    }
}
