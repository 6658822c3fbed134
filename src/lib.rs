pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod stats;
#[cfg(test)]
mod test_utils;
pub mod validation;

use crate::cli::Cli;
use crate::config::{load_file_config, AppConfig};
use crate::constants::{CONFIG_FILE_NAME, DB_FILE_NAME};
use crate::db::{migrations, Database};
use crate::error::AppError;
use crate::models::Book;
use directories::ProjectDirs;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// Error type for reading log initialization failures
#[derive(Debug)]
pub enum InitError {
    NoProjectDirs,
    DataDirCreation(std::io::Error),
    DatabaseOpen(rusqlite::Error),
    Schema(rusqlite::Error),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::NoProjectDirs => write!(f, "Could not determine project directories"),
            InitError::DataDirCreation(e) => write!(f, "Could not create data directory: {e}"),
            InitError::DatabaseOpen(e) => write!(f, "Failed to open database: {e}"),
            InitError::Schema(e) => write!(f, "Failed to create database schema: {e}"),
        }
    }
}

impl std::error::Error for InitError {}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "readinglog", "ReadingLog")
}

fn get_db_path() -> Result<PathBuf, InitError> {
    let proj_dirs = project_dirs().ok_or(InitError::NoProjectDirs)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(InitError::DataDirCreation)?;
    Ok(data_dir.join(DB_FILE_NAME))
}

fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Open the store and ensure its schema. Nothing is served if this fails.
pub fn open_store(path: &Path) -> Result<Database, InitError> {
    let db = Database::open(path).map_err(|e| {
        error!("Failed to open database: {e}");
        InitError::DatabaseOpen(e)
    })?;

    migrations::run(db.connection()).map_err(|e| {
        error!("Failed to create schema: {e}");
        InitError::Schema(e)
    })?;

    match Book::count(db.connection()) {
        Ok(n) => info!("Reading log holds {n} records"),
        Err(e) => warn!("Could not count records: {e}"),
    }

    Ok(db)
}

/// Process exit status for a failed command: 2 when input was rejected as
/// invalid, 1 for everything else.
pub fn failure_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<AppError>().is_some_and(AppError::is_validation) {
        2
    } else {
        1
    }
}

/// Resolve configuration, open the store, run one command, close the store.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = load_file_config(cli.config.as_deref(), default_config_path())?;
    let config = AppConfig::resolve(&cli.config_overrides(), file_config, || {
        get_db_path().map_err(anyhow::Error::from)
    })?;

    let db = open_store(&config.db_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = cli::execute(cli.command, &db, &config, &mut out);

    if let Err(e) = db.close() {
        error!("Failed to close database: {e}");
    }
    result
}
