//! Service adapters: concrete implementations of the ports.

pub mod paths;
pub mod runtime;
pub mod settings;
pub mod store;
pub mod surface;

pub use paths::{ensure_log_dir, get_log_dir, get_store_path};
pub use runtime::AsyncRuntime;
pub use settings::{ensure_settings_file, get_settings_path, load_settings, load_settings_from};
pub use store::{FileStore, MemoryStore};
pub use surface::RopeSurface;
