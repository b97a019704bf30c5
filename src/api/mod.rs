//! Song data loading and models.

mod models;
mod songs;

pub use models::*;
pub use songs::*;
