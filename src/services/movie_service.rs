// src/services/movie_service.rs
//
// Movie Service - validation and filter selection in front of the store
//
// RULES:
// - Every mutation is validated before it reaches the repository
// - Store uniqueness signals become AppError::Duplicate
// - Stateless between calls

use chrono::Datelike;
use std::sync::Arc;

use crate::domain::movie::{
    require_id, validate_id, validate_movie, validate_search_query, validate_year_range,
    FilterPlan, Genre, Movie, MovieFilter,
};
use crate::error::{AppError, AppResult};
use crate::repositories::MovieRepository;

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    /// Fixed reference year; `None` reads the local clock on every call
    fixed_year: Option<i32>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self {
            movie_repo,
            fixed_year: None,
        }
    }

    /// Service pinned to a reference year instead of the clock
    pub fn with_current_year(movie_repo: Arc<dyn MovieRepository>, year: i32) -> Self {
        Self {
            movie_repo,
            fixed_year: Some(year),
        }
    }

    pub fn current_year(&self) -> i32 {
        self.fixed_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Validate and persist a new movie.
    ///
    /// On success the store-assigned id is written back into `movie` and
    /// returned.
    pub fn create_movie(&self, movie: &mut Movie) -> AppResult<i64> {
        validate_movie(movie, self.current_year())?;

        let id = self
            .movie_repo
            .create(movie)
            .map_err(|e| duplicate_or(e, movie))?;

        movie.id = Some(id);
        log::info!("created movie {} '{}' ({})", id, movie.title, movie.year);

        Ok(id)
    }

    pub fn get_movie(&self, id: i64) -> AppResult<Movie> {
        validate_id(id)?;

        self.movie_repo
            .get_by_id(id)?
            .ok_or(AppError::NotFound(id))
    }

    pub fn list_all_movies(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.list_all()
    }

    pub fn search_by_title(&self, query: &str) -> AppResult<Vec<Movie>> {
        let query = validate_search_query(query)?;
        log::debug!("searching titles for '{}'", query);
        self.movie_repo.list_by_title_like(query)
    }

    /// Full-record replace of the movie identified by `movie.id`
    pub fn update_movie(&self, movie: &Movie) -> AppResult<()> {
        let id = require_id(movie.id)?;
        validate_movie(movie, self.current_year())?;

        self.movie_repo
            .update(movie)
            .map_err(|e| duplicate_or(e, movie))?;

        log::info!("updated movie {}", id);
        Ok(())
    }

    /// Delete after checking the movie exists.
    ///
    /// The check and the delete are separate store calls.
    pub fn delete_movie(&self, id: i64) -> AppResult<()> {
        validate_id(id)?;

        if !self.movie_repo.exists(id)? {
            return Err(AppError::NotFound(id));
        }

        self.movie_repo.delete(id)?;
        log::info!("deleted movie {}", id);
        Ok(())
    }

    pub fn list_by_genre(&self, genre: Genre) -> AppResult<Vec<Movie>> {
        self.movie_repo.list_by_genre(genre)
    }

    pub fn list_by_year_range(&self, from: i32, to: i32) -> AppResult<Vec<Movie>> {
        validate_year_range(from, to, self.current_year())?;
        self.movie_repo.list_by_year_range(from, to)
    }

    pub fn list_by_genre_and_year_range(
        &self,
        genre: Genre,
        from: i32,
        to: i32,
    ) -> AppResult<Vec<Movie>> {
        validate_year_range(from, to, self.current_year())?;
        self.movie_repo.list_by_genre_and_year_range(genre, from, to)
    }

    /// List movies through the narrowest query the filter allows
    pub fn find_with_filters(&self, filter: &MovieFilter) -> AppResult<Vec<Movie>> {
        let plan = filter.plan()?;
        log::debug!("filter {:?} resolved to {:?}", filter, plan);

        match plan {
            FilterPlan::All => self.movie_repo.list_all(),
            FilterPlan::ByGenre(genre) => self.movie_repo.list_by_genre(genre),
            FilterPlan::ByYearRange { from, to } => self.movie_repo.list_by_year_range(from, to),
            FilterPlan::ByGenreAndYearRange { genre, from, to } => {
                self.movie_repo.list_by_genre_and_year_range(genre, from, to)
            }
            FilterPlan::Fallback => {
                log::warn!(
                    "filter {:?} has no dedicated query, listing all movies",
                    filter
                );
                self.movie_repo.list_all()
            }
        }
    }
}

/// Translate a store uniqueness signal into a domain duplicate
fn duplicate_or(err: AppError, movie: &Movie) -> AppError {
    match err {
        AppError::ConstraintViolation(detail) => {
            log::warn!(
                "rejected duplicate '{}' ({}): {}",
                movie.title,
                movie.year,
                detail
            );
            AppError::Duplicate {
                title: movie.title.clone(),
                year: movie.year,
            }
        }
        other => other,
    }
}
