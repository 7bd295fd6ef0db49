//! Domain models for the family directory
//!
//! This module contains the core entity models used throughout the crate.
//! Families own their children; both carry generated identifiers that are
//! stable only within one load cycle.

// Re-export entity models
pub mod child;
pub mod family;

// Adapters submodule for record-to-model mapping
pub mod adapters;

// Re-export commonly used types
pub use child::Child;
pub use family::{Family, MAX_CHILDREN};
