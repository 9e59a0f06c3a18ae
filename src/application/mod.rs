// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - It provides the boundary between the front end and the services
// - It translates between DTOs and domain entities
// - It contains no business rules

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod guard;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{CommandResult, ErrorResponse, ErrorType};
pub use guard::{SubmissionGuard, SubmissionPermit};
pub use state::AppState;
