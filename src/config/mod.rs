//! Configuration model for the rename-template engine
//!
//! This module provides the two halves of the data model:
//! - **catalog**: the fixed set of token groups and their default metadata
//! - **model**: the in-memory configuration aggregate mutated by the engine

pub mod catalog;
pub mod model;

// Re-export commonly used types
pub use catalog::GroupKind;
pub use model::{Configuration, GroupConfig, Item};
