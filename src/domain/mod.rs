// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod movie;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use movie::{
    validate_director, validate_id, validate_movie, validate_search_query, validate_title,
    validate_year_range, FilterPlan, Genre, Movie, MovieFilter,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of field rules on user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidField { field, .. } => field,
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
