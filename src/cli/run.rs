use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use crate::application::{self, AppState, CommandResult, ErrorResponse, MovieDto};
use crate::cli::config::{CliConfig, Command};
use crate::db::{
    create_connection_pool, get_connection, get_database_path, get_database_stats,
    initialize_database, verify_database_integrity, ConnectionPool, DatabaseStats,
};
use crate::error::AppResult;
use crate::repositories::{MovieRepository, SqliteMovieRepository};
use crate::services::MovieService;

/// What a subcommand produced, ready to be printed
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Movie(MovieDto),
    Movies(Vec<MovieDto>),
    Created {
        #[serde(rename = "created_id")]
        id: i64,
    },
    Deleted {
        #[serde(rename = "deleted_id")]
        id: i64,
    },
    Genres(Vec<String>),
    Stats(DatabaseStats),
}

pub fn run(config: CliConfig) -> anyhow::Result<ExitCode> {
    // 1. INFRASTRUCTURE
    let db_path = match config.database {
        Some(path) => path,
        None => get_database_path()?,
    };
    let pool = Arc::new(
        create_connection_pool(&db_path, config.pool_size)
            .with_context(|| format!("cannot open database {}", db_path.display()))?,
    );
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }

    // 2. REPOSITORIES
    let movie_repo: Arc<dyn MovieRepository> = Arc::new(SqliteMovieRepository::new(pool.clone()));

    // 3. SERVICES
    let movie_service = Arc::new(MovieService::new(movie_repo));

    // 4. APPLICATION STATE
    let state = AppState::new(movie_service);

    let result = execute(&state, &pool, config.command);

    let mut stdout = std::io::stdout().lock();
    match result {
        Ok(output) => {
            render(&mut stdout, &output, config.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if config.json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&error)?)?;
            } else {
                eprintln!("error: {}", error);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Dispatch one subcommand to its application command
pub fn execute(state: &AppState, pool: &ConnectionPool, command: Command) -> CommandResult<Output> {
    let output = match command {
        Command::Add(args) => Output::Created {
            id: application::create_movie(state, args.into())?,
        },
        Command::Get { id } => Output::Movie(application::get_movie(state, id)?),
        Command::List(args) => Output::Movies(application::filter_movies(state, args.into())?),
        Command::Search { query } => Output::Movies(application::search_movies(state, &query)?),
        Command::Update { id, movie } => {
            Output::Movie(application::update_movie(state, id, movie.into())?)
        }
        Command::Delete { id, yes } => {
            if !yes {
                return Err(ErrorResponse::validation(format!(
                    "refusing to delete movie {} without --yes",
                    id
                )));
            }
            application::delete_movie(state, id)?;
            Output::Deleted { id }
        }
        Command::Genres => Output::Genres(application::list_genres()),
        Command::Check => {
            let conn = get_connection(pool)?;
            verify_database_integrity(&conn)?;
            Output::Stats(get_database_stats(&conn)?)
        }
    };

    Ok(output)
}

/// Print `output` as text or pretty JSON. Write and encoding failures come
/// back as `AppError::Io` and `AppError::Serialization`.
pub fn render<W: Write>(out: &mut W, output: &Output, json: bool) -> AppResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(output)?)?;
        return Ok(());
    }

    match output {
        Output::Movie(movie) => writeln!(out, "{}", movie_line(movie))?,
        Output::Movies(movies) => {
            for movie in movies {
                writeln!(out, "{}", movie_line(movie))?;
            }
            writeln!(out, "{} movie(s)", movies.len())?;
        }
        Output::Created { id } => writeln!(out, "Movie saved (id {})", id)?,
        Output::Deleted { id } => writeln!(out, "Movie {} deleted", id)?,
        Output::Genres(genres) => {
            for genre in genres {
                writeln!(out, "{}", genre)?;
            }
        }
        Output::Stats(stats) => {
            writeln!(out, "integrity: ok")?;
            writeln!(out, "schema version: {}", stats.schema_version)?;
            writeln!(out, "movies: {}", stats.movie_count)?;
            writeln!(out, "size: {} bytes ({} pages)", stats.size_bytes, stats.page_count)?;
        }
    }

    Ok(())
}

fn movie_line(movie: &MovieDto) -> String {
    format!(
        "{:>5}  {:<40}  {:<24}  {}  {:>3} min  {}",
        movie.id, movie.title, movie.director, movie.year, movie.duration_minutes, movie.genre
    )
}
