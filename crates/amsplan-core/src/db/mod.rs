//! Database operations and SQLite management for projects.
//!
//! This module provides the low-level store behind the [`crate::Planner`].
//! It owns the SQLite connection and schema, and offers query interfaces
//! for projects, colors and plates. Domain rules (the single printing
//! plate, color removal) are checked on the in-memory [`crate::Project`]
//! before the resulting changes are written in one transaction.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod color_queries;
pub mod migrations;
pub mod plate_queries;
pub mod project_queries;
mod rows;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
