use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// A movie in the catalog.
///
/// This is the only record type the store persists. Identity is assigned by
/// the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned identifier, `None` until the movie is persisted
    pub id: Option<i64>,

    /// Title, at most 100 characters
    pub title: String,

    pub director: String,

    /// Release year
    pub year: i32,

    /// Running time in minutes
    pub duration_minutes: i32,

    pub genre: Genre,
}

impl Movie {
    /// Create a movie that has not been persisted yet
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        duration_minutes: i32,
        genre: Genre,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            director: director.into(),
            year,
            duration_minutes,
            genre,
        }
    }

    /// Same movie, carrying a known identifier (used for full-record updates)
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Closed set of genre tags a movie can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Documentary,
    Drama,
    Fantasy,
    Horror,
    Musical,
    Romance,
    SciFi,
    Thriller,
    Western,
}

impl Genre {
    pub const ALL: [Genre; 13] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Documentary,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Musical,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::Western,
    ];

    /// Canonical name, as stored in the database and shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Musical => "Musical",
            Genre::Romance => "Romance",
            Genre::SciFi => "SciFi",
            Genre::Thriller => "Thriller",
            Genre::Western => "Western",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidField {
                field: "genre",
                message: "genre cannot be empty".to_string(),
            });
        }

        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::InvalidField {
                field: "genre",
                message: format!("unknown genre '{}'", name),
            })
    }
}
