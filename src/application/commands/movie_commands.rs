// src/application/commands/movie_commands.rs
//
// Movie Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::*,
    error_handling::CommandResult,
    state::AppState,
};
use crate::domain::Genre;
use crate::error::AppError;

/// List all movies
pub fn list_movies(state: &AppState) -> CommandResult<Vec<MovieDto>> {
    let movies = state.movie_service.list_all_movies()?;

    Ok(movies.into_iter().map(MovieDto::from).collect())
}

/// Get a single movie by ID
pub fn get_movie(state: &AppState, movie_id: i64) -> CommandResult<MovieDto> {
    let movie = state.movie_service.get_movie(movie_id)?;

    Ok(MovieDto::from(movie))
}

/// Search movies whose title contains `query`
pub fn search_movies(state: &AppState, query: &str) -> CommandResult<Vec<MovieDto>> {
    let movies = state.movie_service.search_by_title(query)?;

    Ok(movies.into_iter().map(MovieDto::from).collect())
}

/// Create a new movie and return its id.
///
/// Only one create can run at a time per state; a concurrent call fails
/// with `ErrorType::Busy`.
pub fn create_movie(state: &AppState, dto: MovieFormDto) -> CommandResult<i64> {
    let _permit = state
        .create_guard
        .try_acquire()
        .ok_or(AppError::SubmissionInProgress)?;

    let mut movie = dto.into_movie()?;
    let movie_id = state.movie_service.create_movie(&mut movie)?;

    Ok(movie_id)
}

/// Replace every field of an existing movie
pub fn update_movie(state: &AppState, movie_id: i64, dto: MovieFormDto) -> CommandResult<MovieDto> {
    let movie = dto.into_movie()?.with_id(movie_id);

    state.movie_service.update_movie(&movie)?;

    Ok(MovieDto::from(movie))
}

/// Delete a movie by ID
pub fn delete_movie(state: &AppState, movie_id: i64) -> CommandResult<()> {
    state.movie_service.delete_movie(movie_id)?;

    Ok(())
}

/// List movies matching an optional genre and year range
pub fn filter_movies(state: &AppState, dto: MovieFilterDto) -> CommandResult<Vec<MovieDto>> {
    let filter = dto.into_filter()?;
    let movies = state.movie_service.find_with_filters(&filter)?;

    Ok(movies.into_iter().map(MovieDto::from).collect())
}

/// Genre names accepted by the forms, in display order
pub fn list_genres() -> Vec<String> {
    Genre::ALL.iter().map(|g| g.to_string()).collect()
}
