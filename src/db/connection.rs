// src/db/connection.rs
//
// Pooled SQLite connections for the catalog file. Every connection is set up
// identically in `with_init`, so queries can rely on the pragmas and on
// `casefold` being present.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub type ConnectionPool = Pool<SqliteConnectionManager>;

pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Default pool size (a desktop catalog has a single user)
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// `{data_dir}/movieshelf/movieshelf.db`, used when no `--database` is given
pub fn get_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("movieshelf").join("movieshelf.db"))
}

/// Open (creating directories as needed) a pool of at most `max_size`
/// connections. Each connection runs in WAL mode with a 5s busy timeout and
/// has `casefold` registered.
pub fn create_connection_pool(db_path: &Path, max_size: u32) -> AppResult<ConnectionPool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    log::debug!("opening database at {}", db_path.display());

    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        register_functions(conn)
    });

    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Register the scalar functions queries rely on.
///
/// `casefold(text)` lowercases with Unicode rules; SQLite's own `lower()`
/// and `LIKE` only fold ASCII.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "casefold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}

/// Get a connection from the pool
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// In-memory connection configured like the pooled ones, for tests
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(AppError::Database)?;
    register_functions(&conn).map_err(AppError::Database)?;

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_path() {
        let path = get_database_path().unwrap();
        assert!(path.ends_with("movieshelf/movieshelf.db"));
    }

    #[test]
    fn test_connection_pool_creation() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("catalog.db");

        let pool = create_connection_pool(&db_path, 2).unwrap();
        let conn = get_connection(&pool).unwrap();

        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);
        assert!(db_path.exists());
    }

    #[test]
    fn test_test_connection() {
        let conn = create_test_connection().unwrap();

        let result: i32 = conn
            .query_row("SELECT 1 + 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 2);
    }

    #[test]
    fn test_casefold_handles_non_ascii() {
        let conn = create_test_connection().unwrap();

        let folded: String = conn
            .query_row("SELECT casefold('ÉLITE Amélie')", [], |row| row.get(0))
            .unwrap();
        assert_eq!(folded, "élite amélie");

        let null: Option<String> = conn
            .query_row("SELECT casefold(NULL)", [], |row| row.get(0))
            .unwrap();
        assert_eq!(null, None);
    }
}
