//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early databases had no duration tie-break preference per project
        let has_sort_order: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('projects') WHERE name = 'sort_order'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect projects table")?;

        if !has_sort_order {
            info!("Adding sort_order column to projects");
            self.connection
                .execute(
                    "ALTER TABLE projects ADD COLUMN sort_order TEXT NOT NULL DEFAULT 'ascending'",
                    [],
                )
                .db_context("Failed to add sort_order column to projects table")?;
        }

        Ok(())
    }
}
