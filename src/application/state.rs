// src/application/state.rs

use std::sync::Arc;

use crate::application::guard::SubmissionGuard;
use crate::services::MovieService;

/// Application state shared by all commands.
/// Services are initialized at startup and passed here.
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    /// Gate for the "add movie" form
    pub create_guard: SubmissionGuard,
}

impl AppState {
    pub fn new(movie_service: Arc<MovieService>) -> Self {
        Self {
            movie_service,
            create_guard: SubmissionGuard::new(),
        }
    }
}
