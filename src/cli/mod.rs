// src/cli/mod.rs
//
// Command-line front end: one subcommand per catalog action

pub mod config;
pub mod run;

pub use config::{CliConfig, Command};
pub use run::run;
