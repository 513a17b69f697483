//! Headless session core.

pub mod abilities;
pub mod diagnostics;
pub mod editor;
pub mod effects;
pub mod language;
pub mod problems;
pub mod services;
pub mod session;
pub mod timers;

pub use abilities::{Ability, AbilityKind, AbilityMatch, ABILITIES};
pub use editor::{Extension, FontSize, SessionConfig, SyntaxDocument, SyntaxSupport};
pub use effects::{DefaultEffects, EffectHandlers};
pub use language::{LanguageId, LanguageRegistry, LanguageSpec};
pub use problems::{Diagnostic, Severity};
pub use session::{AbilityCallback, EditorSession, SessionError};
