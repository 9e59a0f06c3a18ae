// src/db/migrations.rs
//
// Catalog schema bootstrap. The movie table is created once; a file written
// by any other schema version is refused rather than migrated.

use std::cmp::Ordering;

use rusqlite::Connection;
use crate::error::{AppError, AppResult};

/// The only schema version this build reads and writes
const SCHEMA_VERSION: i32 = 1;

/// Create the catalog schema on a fresh file, accept a file already at
/// `SCHEMA_VERSION`, reject everything else. Safe to call on every start.
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let found = get_schema_version(conn)?;

    if found == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
        log::info!("created movie catalog schema v{}", SCHEMA_VERSION);
        return Ok(());
    }

    match found.cmp(&SCHEMA_VERSION) {
        Ordering::Equal => Ok(()),
        Ordering::Less => Err(AppError::Other(format!(
            "catalog schema v{} predates v{} and cannot be opened",
            found, SCHEMA_VERSION
        ))),
        Ordering::Greater => Err(AppError::Other(format!(
            "catalog schema v{} is newer than supported v{}",
            found, SCHEMA_VERSION
        ))),
    }
}

/// Highest recorded schema version, 0 for a file without the version table
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let table_exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )
        .map_err(AppError::Database)?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )
    .map_err(AppError::Database)?;

    Ok(())
}

/// Run the embedded schema.sql
fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    let schema = include_str!("../../schema.sql");

    conn.execute_batch(schema)
        .map_err(|e| AppError::Other(format!("Failed to apply initial schema: {}", e)))?;

    Ok(())
}

/// `PRAGMA integrity_check` must answer "ok"
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    if result != "ok" {
        return Err(AppError::Other(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

/// File size, page layout, schema version and movie count for `check`
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn
        .query_row("PRAGMA page_count", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let page_size: i64 = conn
        .query_row("PRAGMA page_size", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let movie_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        schema_version: get_schema_version(conn)?,
        movie_count,
    })
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub schema_version: i32,
    pub movie_count: i64,
}
