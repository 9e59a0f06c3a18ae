// Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use movieshelf::db::{create_connection_pool, initialize_database};
use movieshelf::{Genre, Movie, MovieRepository, MovieService, SqliteMovieRepository};
use tempfile::TempDir;

pub const CURRENT_YEAR: i32 = 2024;

/// A service over a fresh on-disk database. Keep the TempDir alive.
pub fn service() -> (TempDir, MovieService) {
    let dir = tempfile::tempdir().expect("tempdir");
    let pool = create_connection_pool(&dir.path().join("movies.db"), 2).expect("pool");
    initialize_database(&pool.get().expect("conn")).expect("schema");

    let repo: Arc<dyn MovieRepository> = Arc::new(SqliteMovieRepository::new(Arc::new(pool)));
    (dir, MovieService::with_current_year(repo, CURRENT_YEAR))
}

pub fn movie(title: &str, genre: Genre, year: i32) -> Movie {
    Movie::new(title, "Some Director", year, 100, genre)
}
