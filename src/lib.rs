//! scriptio - editor session layer for a competitive coding game.
//!
//! Module layout:
//! - kernel::session: the session controller a host page drives
//! - kernel::language / kernel::editor: language registry, syntax support, session configuration
//! - kernel::diagnostics: error output -> editor line
//! - kernel::abilities / kernel::effects / kernel::timers: typed abilities and their effects
//! - kernel::services: collaborator contracts (ports) and concrete implementations (adapters)

pub mod kernel;
