pub mod entity;
pub mod filter;
pub mod invariants;

pub use entity::{Genre, Movie};
pub use filter::{FilterPlan, MovieFilter};
pub use invariants::{
    require_id, validate_director, validate_id, validate_movie, validate_search_query,
    validate_title, validate_year_range,
};
