//! Construction of [`Planner`] handles.
//!
//! The builder decides where the project database lives and makes sure the
//! file is usable (directory present, schema applied) before any command
//! runs, so later operations only deal with their own errors.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
};

const APP_PREFIX: &str = "amsplan";
const DATABASE_FILE: &str = "amsplan.db";

/// Configures and opens a [`Planner`].
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores projects in `path` instead of the per-user data directory
    /// (`$XDG_DATA_HOME/amsplan/amsplan.db`). `None` keeps the default.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        self.database_path = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Resolves the database location, creates its directory and applies the
    /// schema once.
    ///
    /// # Errors
    ///
    /// * `PlannerError::XdgDirectory` - no data directory could be determined
    /// * `PlannerError::FileSystem` - the parent directory cannot be created
    /// * `PlannerError::Database` - the file cannot be opened or migrated
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => default_database_path()?,
        };
        ensure_parent_dir(&db_path)?;

        debug!("Preparing project database at {}", db_path.display());
        let schema_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&schema_path).map(drop))
            .await
            .map_err(PlannerError::join)??;

        Ok(Planner::new(db_path))
    }
}

fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_PREFIX)
        .place_data_file(DATABASE_FILE)
        .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
}

fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
