// src/lib.rs
// Movieshelf - Local-first movie catalog manager
//
// Architecture:
// - Domain: the Movie entity, its field invariants and filter selection
// - Repositories: explicit SQL over a pooled SQLite connection
// - Services: validation in front of every store call
// - Application: DTO/command boundary for front ends
// - CLI: one subcommand per catalog action

pub mod application;
pub mod cli;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use domain::{validate_movie, DomainError, FilterPlan, Genre, Movie, MovieFilter};

pub use error::{AppError, AppResult};

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use repositories::{MovieRepository, SqliteMovieRepository};

pub use services::MovieService;

pub use application::{AppState, ErrorResponse, ErrorType};
