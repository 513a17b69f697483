//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the session needs from its environment.
//! - `adapters`: concrete implementations (in-memory, on-disk, headless surface).

pub mod adapters;
pub mod ports;
