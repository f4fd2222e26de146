//! Row mapping and loading helpers shared by the query modules.
//!
//! These take a plain `&Connection` so they work both on the database
//! connection and inside a transaction.

use std::collections::{BTreeSet, HashMap};

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Color, ColorId, Plate, Project, SortOrder},
};

const SELECT_PROJECT_SQL: &str =
    "SELECT id, name, slot_capacity, sort_order, created_at, updated_at FROM projects WHERE id = ?1";
const SELECT_COLORS_SQL: &str =
    "SELECT id, name, color_order FROM colors WHERE project_id = ?1 ORDER BY color_order, id";
const SELECT_PLATES_SQL: &str = "SELECT id, project_id, name, estimated_minutes, printed, printing, plate_order FROM plates WHERE project_id = ?1 ORDER BY plate_order, id";
const SELECT_PLATE_COLORS_SQL: &str = "SELECT pc.plate_id, pc.color_id FROM plate_colors pc JOIN plates p ON p.id = pc.plate_id WHERE p.project_id = ?1";
const SELECT_LOADED_SQL: &str = "SELECT color_id FROM loaded_colors WHERE project_id = ?1";
const SELECT_COLOR_PROJECT_SQL: &str = "SELECT project_id FROM colors WHERE id = ?1";
const SELECT_PLATE_PROJECT_SQL: &str = "SELECT project_id FROM plates WHERE id = ?1";
const UPDATE_PROJECT_TIMESTAMP_SQL: &str = "UPDATE projects SET updated_at = ?1 WHERE id = ?2";

pub(super) fn timestamp_at(row: &Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

pub(super) fn sort_order_at(row: &Row, index: usize) -> rusqlite::Result<SortOrder> {
    let value: String = row.get(index)?;
    value.parse::<SortOrder>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            format!("Invalid sort order: {value}").into(),
        )
    })
}

/// Reads a stored slot count; anything out of range reads as 0, which the
/// model treats as the default capacity.
pub(super) fn slot_capacity_at(row: &Row, index: usize) -> rusqlite::Result<u32> {
    Ok(u32::try_from(row.get::<_, i64>(index)?).unwrap_or(0))
}

fn project_from_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        slot_capacity: slot_capacity_at(row, 2)?,
        sort_order: sort_order_at(row, 3)?,
        colors: Vec::new(),
        plates: Vec::new(),
        loaded_colors: BTreeSet::new(),
        created_at: timestamp_at(row, 4)?,
        updated_at: timestamp_at(row, 5)?,
    })
}

fn color_from_row(row: &Row) -> rusqlite::Result<Color> {
    Ok(Color {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        position: row.get::<_, i64>(2)? as u32,
    })
}

fn plate_from_row(row: &Row) -> rusqlite::Result<Plate> {
    Ok(Plate {
        id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        name: row.get(2)?,
        colors: BTreeSet::new(),
        estimated_minutes: u32::try_from(row.get::<_, i64>(3)?).unwrap_or(0),
        printed: row.get(4)?,
        printing: row.get(5)?,
        position: row.get::<_, i64>(6)? as u32,
    })
}

/// Loads a project with its colors, plates and loaded colors.
pub(super) fn load_project(conn: &Connection, id: u64) -> Result<Option<Project>> {
    let project = conn
        .query_row(SELECT_PROJECT_SQL, params![id as i64], project_from_row)
        .optional()
        .db_context("Failed to query project")?;

    let Some(mut project) = project else {
        return Ok(None);
    };

    let mut stmt = conn
        .prepare(SELECT_COLORS_SQL)
        .db_context("Failed to prepare color query")?;
    project.colors = stmt
        .query_map(params![id as i64], color_from_row)
        .db_context("Failed to query colors")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to fetch colors")?;

    let mut stmt = conn
        .prepare(SELECT_PLATE_COLORS_SQL)
        .db_context("Failed to prepare plate color query")?;
    let mut plate_colors: HashMap<u64, BTreeSet<ColorId>> = HashMap::new();
    let pairs = stmt
        .query_map(params![id as i64], |row| {
            Ok((row.get::<_, i64>(0)? as u64, row.get::<_, i64>(1)? as u64))
        })
        .db_context("Failed to query plate colors")?;
    for pair in pairs {
        let (plate_id, color_id) = pair.db_context("Failed to fetch plate colors")?;
        plate_colors.entry(plate_id).or_default().insert(color_id);
    }

    let mut stmt = conn
        .prepare(SELECT_PLATES_SQL)
        .db_context("Failed to prepare plate query")?;
    project.plates = stmt
        .query_map(params![id as i64], plate_from_row)
        .db_context("Failed to query plates")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to fetch plates")?;
    for plate in &mut project.plates {
        plate.colors = plate_colors.remove(&plate.id).unwrap_or_default();
    }

    let mut stmt = conn
        .prepare(SELECT_LOADED_SQL)
        .db_context("Failed to prepare loaded color query")?;
    project.loaded_colors = stmt
        .query_map(params![id as i64], |row| Ok(row.get::<_, i64>(0)? as u64))
        .db_context("Failed to query loaded colors")?
        .collect::<rusqlite::Result<BTreeSet<_>>>()
        .db_context("Failed to fetch loaded colors")?;

    Ok(Some(project))
}

/// Loads a project or fails with `ProjectNotFound`.
pub(super) fn require_project(conn: &Connection, id: u64) -> Result<Project> {
    load_project(conn, id)?.ok_or(PlannerError::ProjectNotFound { id })
}

/// Project owning a color, or `ColorNotFound`.
pub(super) fn project_of_color(conn: &Connection, color_id: ColorId) -> Result<u64> {
    conn.query_row(SELECT_COLOR_PROJECT_SQL, params![color_id as i64], |row| {
        row.get::<_, i64>(0)
    })
    .optional()
    .db_context("Failed to look up color")?
    .map(|id| id as u64)
    .ok_or(PlannerError::ColorNotFound { id: color_id })
}

/// Project owning a plate, or `PlateNotFound`.
pub(super) fn project_of_plate(conn: &Connection, plate_id: u64) -> Result<u64> {
    conn.query_row(SELECT_PLATE_PROJECT_SQL, params![plate_id as i64], |row| {
        row.get::<_, i64>(0)
    })
    .optional()
    .db_context("Failed to look up plate")?
    .map(|id| id as u64)
    .ok_or(PlannerError::PlateNotFound { id: plate_id })
}

pub(super) fn touch_project(conn: &Connection, project_id: u64, now: &str) -> Result<()> {
    conn.execute(UPDATE_PROJECT_TIMESTAMP_SQL, params![now, project_id as i64])
        .db_context("Failed to update project timestamp")?;
    Ok(())
}
