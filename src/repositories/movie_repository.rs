// src/repositories/movie_repository.rs
//
// Movie persistence
//
// Uniqueness of (title, year) is enforced by the table; violations surface
// as AppError::ConstraintViolation and are translated by the service.

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::movie::{Genre, Movie};
use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    /// Insert a new movie and return the store-assigned id
    fn create(&self, movie: &Movie) -> AppResult<i64>;

    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    fn list_all(&self) -> AppResult<Vec<Movie>>;

    /// Case-insensitive substring match on the title
    fn list_by_title_like(&self, fragment: &str) -> AppResult<Vec<Movie>>;

    fn list_by_genre(&self, genre: Genre) -> AppResult<Vec<Movie>>;

    /// Inclusive on both ends
    fn list_by_year_range(&self, from: i32, to: i32) -> AppResult<Vec<Movie>>;

    fn list_by_genre_and_year_range(
        &self,
        genre: Genre,
        from: i32,
        to: i32,
    ) -> AppResult<Vec<Movie>>;

    /// Overwrite every field of the movie with `movie.id`
    fn update(&self, movie: &Movie) -> AppResult<()>;

    fn delete(&self, id: i64) -> AppResult<()>;

    fn exists(&self, id: i64) -> AppResult<bool>;
}

// ---------------------------------------------------------------------
// SQLite Implementation
// ---------------------------------------------------------------------
const SELECT_MOVIES: &str =
    "SELECT id, title, director, year, duration_minutes, genre FROM movies";

const ORDER_BY: &str = "ORDER BY title, year, id";

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Movie - returns rusqlite::Error for query_map compatibility
    fn row_to_movie(row: &Row) -> rusqlite::Result<Movie> {
        let genre_str: String = row.get("genre")?;
        let genre = genre_str.parse::<Genre>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Invalid genre '{}': {}", genre_str, e),
                )),
            )
        })?;

        Ok(Movie {
            id: Some(row.get("id")?),
            title: row.get("title")?,
            director: row.get("director")?,
            year: row.get("year")?,
            duration_minutes: row.get("duration_minutes")?,
            genre,
        })
    }

    fn query_movies<P: rusqlite::Params>(&self, filter: &str, params: P) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let sql = format!("{} {} {}", SELECT_MOVIES, filter, ORDER_BY);
        let mut stmt = conn.prepare(&sql)?;

        let movies = stmt
            .query_map(params, Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }
}

/// Escape LIKE wildcards so the fragment matches literally
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl MovieRepository for SqliteMovieRepository {
    fn create(&self, movie: &Movie) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO movies (title, director, year, duration_minutes, genre)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                movie.title,
                movie.director,
                movie.year,
                movie.duration_minutes,
                movie.genre.as_str(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_MOVIES))?;

        match stmt.query_row(params![id], Self::row_to_movie) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Movie>> {
        self.query_movies("", [])
    }

    fn list_by_title_like(&self, fragment: &str) -> AppResult<Vec<Movie>> {
        self.query_movies(
            "WHERE casefold(title) LIKE '%' || casefold(?1) || '%' ESCAPE '\\'",
            params![escape_like(fragment)],
        )
    }

    fn list_by_genre(&self, genre: Genre) -> AppResult<Vec<Movie>> {
        self.query_movies("WHERE genre = ?1", params![genre.as_str()])
    }

    fn list_by_year_range(&self, from: i32, to: i32) -> AppResult<Vec<Movie>> {
        self.query_movies("WHERE year BETWEEN ?1 AND ?2", params![from, to])
    }

    fn list_by_genre_and_year_range(
        &self,
        genre: Genre,
        from: i32,
        to: i32,
    ) -> AppResult<Vec<Movie>> {
        self.query_movies(
            "WHERE genre = ?1 AND year BETWEEN ?2 AND ?3",
            params![genre.as_str(), from, to],
        )
    }

    fn update(&self, movie: &Movie) -> AppResult<()> {
        let id = movie
            .id
            .ok_or_else(|| AppError::Other("Cannot update a movie without id".to_string()))?;

        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "UPDATE movies
             SET title = ?1, director = ?2, year = ?3, duration_minutes = ?4, genre = ?5
             WHERE id = ?6",
            params![
                movie.title,
                movie.director,
                movie.year,
                movie.duration_minutes,
                movie.genre.as_str(),
                id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }

        Ok(())
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM movies WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, initialize_database};
    use tempfile::TempDir;

    fn repo() -> (TempDir, SqliteMovieRepository) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("test.db"), 2).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        (dir, SqliteMovieRepository::new(Arc::new(pool)))
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let (_dir, repo) = repo();
        let first = repo
            .create(&Movie::new("Alien", "Ridley Scott", 1979, 117, Genre::SciFi))
            .unwrap();
        let second = repo
            .create(&Movie::new("Aliens", "James Cameron", 1986, 137, Genre::SciFi))
            .unwrap();

        assert!(first > 0);
        assert!(second > first);
        assert!(repo.exists(first).unwrap());
    }

    #[test]
    fn test_duplicate_is_constraint_violation() {
        let (_dir, repo) = repo();
        let movie = Movie::new("Alien", "Ridley Scott", 1979, 117, Genre::SciFi);
        repo.create(&movie).unwrap();

        let err = repo.create(&movie).unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)), "{:?}", err);
    }

    #[test]
    fn test_title_like_is_case_insensitive_and_literal() {
        let (_dir, repo) = repo();
        repo.create(&Movie::new("The Matrix", "Wachowskis", 1999, 136, Genre::SciFi))
            .unwrap();
        repo.create(&Movie::new("100% Wolf", "Alexs Stadermann", 2020, 96, Genre::Animation))
            .unwrap();

        let found = repo.list_by_title_like("MATRIX").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "The Matrix");

        let found = repo.list_by_title_like("%").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "100% Wolf");
    }

    #[test]
    fn test_title_like_folds_accented_letters() {
        let (_dir, repo) = repo();
        repo.create(&Movie::new("Élite Squad", "José Padilha", 2007, 115, Genre::Action))
            .unwrap();

        assert_eq!(repo.list_by_title_like("élite").unwrap().len(), 1);
        assert_eq!(repo.list_by_title_like("ÉLITE SQ").unwrap().len(), 1);
        assert!(repo.list_by_title_like("elite").unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let (_dir, repo) = repo();
        let ghost = Movie::new("Ghost", "Jerry Zucker", 1990, 127, Genre::Romance).with_id(42);

        assert!(matches!(repo.update(&ghost), Err(AppError::NotFound(42))));
        assert!(matches!(repo.delete(42), Err(AppError::NotFound(42))));
    }

    #[test]
    fn test_unknown_genre_in_table_is_an_error() {
        let (_dir, repo) = repo();
        {
            let conn = repo.pool.get().unwrap();
            conn.execute(
                "INSERT INTO movies (title, director, year, duration_minutes, genre)
                 VALUES ('Odd', 'Someone', 2000, 90, 'Telenovela')",
                [],
            )
            .unwrap();
        }

        assert!(repo.list_all().is_err());
    }
}
