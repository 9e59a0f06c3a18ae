use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::{MovieFilterDto, MovieFormDto};
use crate::db::DEFAULT_POOL_SIZE;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Manage a local catalog of movies: add, search, update, delete and filter by genre or year."
)]
pub struct CliConfig {
    /// SQLite database file (defaults to the user data directory)
    #[arg(long, env = "MOVIESHELF_DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Maximum number of pooled connections
    #[arg(long, env = "MOVIESHELF_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE, global = true)]
    pub pool_size: u32,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new movie
    Add(MovieArgs),
    /// Show a movie by id
    Get { id: i64 },
    /// List movies, optionally filtered by genre and year range
    List(FilterArgs),
    /// Find movies whose title contains the given text
    Search { query: String },
    /// Replace every field of an existing movie
    Update {
        id: i64,
        #[command(flatten)]
        movie: MovieArgs,
    },
    /// Delete a movie by id
    Delete {
        id: i64,
        /// Confirm the deletion; it cannot be undone
        #[arg(long)]
        yes: bool,
    },
    /// List the accepted genre names
    Genres,
    /// Check database integrity and print statistics
    Check,
}

#[derive(Args, Debug, Clone)]
pub struct MovieArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub director: String,
    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,
    /// Running time in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub duration: i32,
    #[arg(long)]
    pub genre: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub genre: Option<String>,
    /// First year of the range (inclusive)
    #[arg(long)]
    pub from: Option<i32>,
    /// Last year of the range (inclusive)
    #[arg(long)]
    pub to: Option<i32>,
}

impl From<MovieArgs> for MovieFormDto {
    fn from(args: MovieArgs) -> Self {
        Self {
            title: args.title,
            director: args.director,
            year: args.year,
            duration_minutes: args.duration,
            genre: args.genre,
        }
    }
}

impl From<FilterArgs> for MovieFilterDto {
    fn from(args: FilterArgs) -> Self {
        Self {
            genre: args.genre,
            year_from: args.from,
            year_to: args.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        CliConfig::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let config = CliConfig::try_parse_from([
            "movieshelf",
            "--database",
            "/tmp/m.db",
            "add",
            "--title",
            "Heat",
            "--director",
            "Michael Mann",
            "--year",
            "1995",
            "--duration",
            "170",
            "--genre",
            "Thriller",
        ])
        .unwrap();

        assert_eq!(config.database, Some(PathBuf::from("/tmp/m.db")));
        match config.command {
            Command::Add(args) => {
                let form = MovieFormDto::from(args);
                assert_eq!(form.title, "Heat");
                assert_eq!(form.duration_minutes, 170);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_filters() {
        let config =
            CliConfig::try_parse_from(["movieshelf", "list", "--genre", "Drama", "--from", "1990", "--to", "2000", "--json"])
                .unwrap();

        assert!(config.json);
        match config.command {
            Command::List(args) => {
                let dto = MovieFilterDto::from(args);
                assert_eq!(dto.genre.as_deref(), Some("Drama"));
                assert_eq!(dto.year_from, Some(1990));
                assert_eq!(dto.year_to, Some(2000));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
