use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Longest title accepted, in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Earliest release year accepted anywhere
pub const MIN_YEAR: i32 = 1900;

pub const MIN_DURATION: i32 = 1;
pub const MAX_DURATION: i32 = 999;

/// Validates all Movie field invariants.
///
/// Checks run in field order and stop at the first failure, so the returned
/// error always names a single field. `current_year` is the reference for the
/// upper year bound (`current_year + 1`, to allow announced releases).
pub fn validate_movie(movie: &Movie, current_year: i32) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_director(&movie.director)?;
    validate_year(movie.year, current_year)?;
    validate_duration(movie.duration_minutes)?;
    Ok(())
}

/// Identifiers handed out by the store are always positive
pub fn validate_id(id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(invalid("id", format!("invalid movie id {}", id)));
    }
    Ok(())
}

/// A movie being updated must carry a store id
pub fn require_id(id: Option<i64>) -> DomainResult<i64> {
    let id = id.ok_or_else(|| invalid("id", "movie id is required"))?;
    validate_id(id)?;
    Ok(id)
}

/// Returns the trimmed query, or an error if nothing is left after trimming
pub fn validate_search_query(query: &str) -> DomainResult<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(invalid("query", "search term cannot be empty"));
    }
    Ok(trimmed)
}

/// Bounds for the dedicated year range queries.
///
/// Unlike creation, the upper bound here is `current_year` itself.
pub fn validate_year_range(from: i32, to: i32, current_year: i32) -> DomainResult<()> {
    if from > to {
        return Err(invalid(
            "year_range",
            format!("'from' year {} is after 'to' year {}", from, to),
        ));
    }
    if from < MIN_YEAR || to > current_year {
        return Err(invalid(
            "year_range",
            format!(
                "year range must lie between {} and {}",
                MIN_YEAR, current_year
            ),
        ));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(invalid("title", "title is required"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(invalid(
            "title",
            format!("title cannot exceed {} characters", MAX_TITLE_LEN),
        ));
    }
    Ok(())
}

pub fn validate_director(director: &str) -> DomainResult<()> {
    if director.trim().is_empty() {
        return Err(invalid("director", "director is required"));
    }
    Ok(())
}

fn validate_year(year: i32, current_year: i32) -> DomainResult<()> {
    let max = current_year + 1;
    if !(MIN_YEAR..=max).contains(&year) {
        return Err(invalid(
            "year",
            format!("year must be between {} and {}", MIN_YEAR, max),
        ));
    }
    Ok(())
}

fn validate_duration(minutes: i32) -> DomainResult<()> {
    if !(MIN_DURATION..=MAX_DURATION).contains(&minutes) {
        return Err(invalid(
            "duration_minutes",
            format!(
                "duration must be between {} and {} minutes",
                MIN_DURATION, MAX_DURATION
            ),
        ));
    }
    Ok(())
}

fn invalid(field: &'static str, message: impl Into<String>) -> DomainError {
    DomainError::InvalidField {
        field,
        message: message.into(),
    }
}

/// Movie invariants:
///
/// 1. Title is not blank and at most 100 characters
/// 2. Director is not blank
/// 3. 1900 <= year <= current year + 1
/// 4. 1 <= duration <= 999 minutes
/// 5. (title, year) is unique across the catalog (enforced by the store)
/// 6. Identity is assigned once by the store and never changes

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::Genre;

    const YEAR: i32 = 2024;

    fn movie() -> Movie {
        Movie::new("Heat", "Michael Mann", 1995, 170, Genre::Thriller)
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(Some(7)).unwrap(), 7);

        let missing = require_id(None).unwrap_err();
        assert_eq!(missing.field(), "id");
        assert!(missing.to_string().contains("movie id is required"));

        assert!(require_id(Some(0)).unwrap_err().to_string().contains("invalid movie id 0"));
    }

    fn failing_field(result: DomainResult<()>) -> &'static str {
        match result {
            Err(DomainError::InvalidField { field, .. }) => field,
            other => panic!("expected field error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_movie() {
        assert!(validate_movie(&movie(), YEAR).is_ok());
    }

    #[test]
    fn test_blank_title_fails() {
        let mut m = movie();
        m.title = "   ".to_string();
        assert_eq!(failing_field(validate_movie(&m, YEAR)), "title");
    }

    #[test]
    fn test_title_length_limit() {
        let mut m = movie();
        m.title = "x".repeat(100);
        assert!(validate_movie(&m, YEAR).is_ok());

        m.title = "x".repeat(101);
        assert_eq!(failing_field(validate_movie(&m, YEAR)), "title");
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        let mut m = movie();
        m.title = "é".repeat(100);
        assert!(validate_movie(&m, YEAR).is_ok());
    }

    #[test]
    fn test_blank_director_fails() {
        let mut m = movie();
        m.director = String::new();
        assert_eq!(failing_field(validate_movie(&m, YEAR)), "director");
    }

    #[test]
    fn test_year_bounds() {
        let mut m = movie();
        for ok in [1900, YEAR, YEAR + 1] {
            m.year = ok;
            assert!(validate_movie(&m, YEAR).is_ok(), "year {} should pass", ok);
        }
        for bad in [1899, YEAR + 2, 0, -5] {
            m.year = bad;
            assert_eq!(failing_field(validate_movie(&m, YEAR)), "year");
        }
    }

    #[test]
    fn test_duration_bounds() {
        let mut m = movie();
        for ok in [1, 999] {
            m.duration_minutes = ok;
            assert!(validate_movie(&m, YEAR).is_ok());
        }
        for bad in [0, -1, 1000] {
            m.duration_minutes = bad;
            assert_eq!(failing_field(validate_movie(&m, YEAR)), "duration_minutes");
        }
    }

    #[test]
    fn test_first_failing_field_wins() {
        let mut m = movie();
        m.director = String::new();
        m.year = 1800;
        m.duration_minutes = 0;
        assert_eq!(failing_field(validate_movie(&m, YEAR)), "director");
    }

    #[test]
    fn test_id_must_be_positive() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(0).is_err());
        assert!(validate_id(-3).is_err());
    }

    #[test]
    fn test_search_query_is_trimmed() {
        assert_eq!(validate_search_query("  alien ").unwrap(), "alien");
        assert!(validate_search_query(" \t ").is_err());
    }

    #[test]
    fn test_year_range_rules() {
        assert!(validate_year_range(1990, 2000, YEAR).is_ok());
        assert!(validate_year_range(1995, 1995, YEAR).is_ok());
        assert!(validate_year_range(2000, 1990, YEAR).is_err());
        assert!(validate_year_range(1899, 2000, YEAR).is_err());
        // announced releases are creatable but not range-searchable
        assert!(validate_year_range(2000, YEAR + 1, YEAR).is_err());
    }
}
