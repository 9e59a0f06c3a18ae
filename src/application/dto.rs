// src/application/dto.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs carry raw user input; validation happens in the service
// - DTOs are simple, serializable structs

use serde::{Deserialize, Serialize};

use crate::domain::{validate_director, validate_title, Genre, Movie, MovieFilter};
use crate::error::{AppError, AppResult};

/// Genre selector value meaning "no genre filter"
pub const ALL_GENRES: &str = "All";

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub duration_minutes: i32,
    pub genre: String,
}

/// Raw form fields, as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieFormDto {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub duration_minutes: i32,
    pub genre: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieFilterDto {
    /// Empty or "All" means any genre
    pub genre: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

// ============================================================================
// CONVERSION HELPERS
// ============================================================================

impl MovieFormDto {
    /// Build an unsaved movie.
    ///
    /// Title and director are checked before the genre is parsed, so a form
    /// that is wrong in several places reports the first field. The remaining
    /// rules run in the service.
    pub fn into_movie(self) -> AppResult<Movie> {
        validate_title(&self.title)?;
        validate_director(&self.director)?;
        let genre: Genre = self.genre.parse()?;
        Ok(Movie::new(
            self.title,
            self.director,
            self.year,
            self.duration_minutes,
            genre,
        ))
    }
}

impl MovieFilterDto {
    pub fn into_filter(self) -> AppResult<MovieFilter> {
        let genre = match self.genre.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) if name.eq_ignore_ascii_case(ALL_GENRES) => None,
            Some(name) => Some(name.parse::<Genre>().map_err(AppError::Validation)?),
        };

        Ok(MovieFilter::new(genre, self.year_from, self.year_to))
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            // persisted movies always carry an id
            id: movie.id.unwrap_or_default(),
            title: movie.title,
            director: movie.director,
            year: movie.year,
            duration_minutes: movie.duration_minutes,
            genre: movie.genre.to_string(),
        }
    }
}
