//! Editor domain: session configuration + syntax support.

pub mod config;
pub mod syntax;

pub use config::{Distortion, Extension, FontSize, SessionConfig, ThemeKind};
pub use syntax::{SyntaxDocument, SyntaxSupport};
