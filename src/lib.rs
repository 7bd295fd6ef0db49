//! A Rust library for loading, normalizing, and searching a bundled family
//! directory with schema-validated decoding and free-text search.

pub mod config;
pub mod error;
pub mod links;
pub mod loader;
pub mod models;
pub mod query;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::DirectorySettings;
pub use error::{DirectoryError, Result};
pub use models::{Child, Family};
pub use schema::FamilyRecord;

// Loading entry points
pub use loader::{
    DEFAULT_LOAD_DELAY, load_directory, load_directory_with_delay, try_load_directory,
    try_load_directory_from_slice, try_load_directory_lenient_from_slice,
};

// Query engine
pub use query::query;
