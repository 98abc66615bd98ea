#![forbid(unsafe_code)]

//! Ordered token-group rename-template engine.
//!
//! The engine behind a print-shop batch-rename tool: named token groups own
//! filename tokens, both sides carry enablement and a dense sort order,
//! drag-and-drop reposition collapses to single insertion-based move calls,
//! and a pattern generator assembles the enabled tokens into the final
//! rename string. Named presets round-trip whole configurations through a
//! key-value settings store.
//!
//! Every mutator takes a `&Configuration` and returns a fresh value; the UI
//! collaborator simply holds the latest returned configuration as its
//! displayed state.

pub mod config;
pub mod conflict;
pub mod constants;
pub mod dimension;
pub mod error;
pub mod pattern;
pub mod preset;
pub mod reorder;
pub mod store;

// Re-export the surface the UI layer consumes
pub use config::{Configuration, GroupConfig, GroupKind, Item};
pub use dimension::{DimensionOptions, ShapeCodes};
pub use error::{EngineError, PersistError, PresetError};
pub use pattern::RuntimeValues;
pub use preset::PresetStore;
pub use store::{FileStore, MemoryStore, SettingsStore};
