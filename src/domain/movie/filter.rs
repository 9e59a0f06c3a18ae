// src/domain/movie/filter.rs
//
// Filter selection for catalog listings.
//
// The store exposes four narrow query shapes instead of a generic predicate.
// A MovieFilter is turned into exactly one of them here, before anything
// reaches the store.

use serde::{Deserialize, Serialize};

use super::entity::Genre;
use crate::domain::{DomainError, DomainResult};

/// Optional genre and year bounds picked by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFilter {
    pub genre: Option<Genre>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

/// The store query a filter resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPlan {
    /// No filter at all
    All,
    ByGenre(Genre),
    ByYearRange { from: i32, to: i32 },
    ByGenreAndYearRange { genre: Genre, from: i32, to: i32 },
    /// A combination with no dedicated query (a single year bound).
    /// Listed in full, like `All`.
    Fallback,
}

impl MovieFilter {
    pub fn new(genre: Option<Genre>, year_from: Option<i32>, year_to: Option<i32>) -> Self {
        Self {
            genre,
            year_from,
            year_to,
        }
    }

    /// Resolve the filter into a store query.
    ///
    /// Priority order: inverted range is rejected first, then the four
    /// supported shapes, then the fallback.
    pub fn plan(&self) -> DomainResult<FilterPlan> {
        if let (Some(from), Some(to)) = (self.year_from, self.year_to) {
            if from > to {
                return Err(DomainError::InvalidField {
                    field: "year_range",
                    message: format!("'from' year {} is after 'to' year {}", from, to),
                });
            }
        }

        if self.is_empty() {
            return Ok(FilterPlan::All);
        }

        let plan = match (self.genre, self.year_from, self.year_to) {
            (Some(genre), None, None) => FilterPlan::ByGenre(genre),
            (None, Some(from), Some(to)) => FilterPlan::ByYearRange { from, to },
            (Some(genre), Some(from), Some(to)) => {
                FilterPlan::ByGenreAndYearRange { genre, from, to }
            }
            _ => FilterPlan::Fallback,
        };

        Ok(plan)
    }

    /// No genre and no year bound
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.year_from.is_none() && self.year_to.is_none()
    }
}
