//! Service ports: traits + data contracts.

pub mod settings;
pub mod store;
pub mod surface;

pub use settings::{ConfigError, Settings};
pub use store::{cache_key, KeyValueStore, StoreError, SELECTED_LANGUAGE_KEY};
pub use surface::{EditingSurface, LineInfo, StateEffect, TextEdit, Transaction};
