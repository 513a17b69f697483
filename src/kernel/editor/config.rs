//! Session configuration: the ordered list of behaviors applied to the editing surface.

use crate::kernel::editor::syntax::SyntaxSupport;
use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Default,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distortion {
    /// Light theme burst layered over the default theme.
    Flashbang,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    Base,
    Scaled(f32),
}

impl FontSize {
    pub fn factor(self) -> f32 {
        match self {
            Self::Base => 1.0,
            Self::Scaled(factor) => factor,
        }
    }

    pub fn px(self, base_px: f32) -> f32 {
        base_px * self.factor()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    BasicSetup,
    Theme(ThemeKind),
    LanguageSupport(SyntaxSupport),
    IndentUnit(usize),
    IndentationMarkers,
    LintGutter,
    FontSize(FontSize),
    CompletionKeymap,
    LineWrapping,
    EditorAttributes { spellcheck: bool },
    ChangePersistence,
    AbilityHighlighters,
    AbilityKeymap,
    Distortion(Distortion),
}

/// Invariants: exactly one `FontSize` entry; at most one `LanguageSupport` entry, and exactly
/// one whenever syntax support is not temporarily disabled. `Default` is the empty list of a
/// surface that has not been configured yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    entries: Vec<Extension>,
}

impl SessionConfig {
    pub fn initial(syntax: impl Into<SyntaxSupport>, settings: &Settings) -> Self {
        Self {
            entries: vec![
                Extension::BasicSetup,
                Extension::Theme(ThemeKind::Default),
                Extension::LanguageSupport(syntax.into()),
                Extension::IndentUnit(settings.tab_size),
                Extension::IndentationMarkers,
                Extension::LintGutter,
                Extension::FontSize(FontSize::Base),
                Extension::CompletionKeymap,
                Extension::LineWrapping,
                Extension::EditorAttributes { spellcheck: false },
                Extension::ChangePersistence,
                Extension::AbilityHighlighters,
                Extension::AbilityKeymap,
            ],
        }
    }

    pub fn entries(&self) -> &[Extension] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, ext: &Extension) -> bool {
        self.entries.contains(ext)
    }

    pub fn syntax_support(&self) -> Option<SyntaxSupport> {
        self.entries.iter().find_map(|ext| match ext {
            Extension::LanguageSupport(syntax) => Some(*syntax),
            _ => None,
        })
    }

    pub fn language_support(&self) -> Option<LanguageId> {
        self.syntax_support().map(SyntaxSupport::language)
    }

    /// Swaps the syntax support of the language-support entry. Returns false when the entry is
    /// absent.
    pub fn set_language_support(&mut self, syntax: impl Into<SyntaxSupport>) -> bool {
        let syntax = syntax.into();
        for ext in &mut self.entries {
            if let Extension::LanguageSupport(current) = ext {
                *current = syntax;
                return true;
            }
        }
        false
    }

    /// Drops the language-support entry, returning the index it occupied and what it held.
    pub fn remove_language_support(&mut self) -> Option<(usize, SyntaxSupport)> {
        let index = self
            .entries
            .iter()
            .position(|ext| matches!(ext, Extension::LanguageSupport(_)))?;
        match self.entries.remove(index) {
            Extension::LanguageSupport(syntax) => Some((index, syntax)),
            _ => None,
        }
    }

    pub fn restore_language_support(&mut self, index: usize, syntax: impl Into<SyntaxSupport>) {
        let syntax = syntax.into();
        if self.set_language_support(syntax) {
            return;
        }
        let index = index.min(self.entries.len());
        self.entries.insert(index, Extension::LanguageSupport(syntax));
    }

    pub fn font_size(&self) -> FontSize {
        self.entries
            .iter()
            .find_map(|ext| match ext {
                Extension::FontSize(size) => Some(*size),
                _ => None,
            })
            .unwrap_or(FontSize::Base)
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        for ext in &mut self.entries {
            if let Extension::FontSize(current) = ext {
                *current = size;
                return;
            }
        }
        self.entries.push(Extension::FontSize(size));
    }

    pub fn tab_size(&self) -> Option<usize> {
        self.entries.iter().find_map(|ext| match ext {
            Extension::IndentUnit(size) => Some(*size),
            _ => None,
        })
    }

    /// Appends a behavior. Language support and font size go through their own setters.
    pub fn push(&mut self, ext: Extension) {
        match ext {
            Extension::LanguageSupport(syntax) => {
                self.restore_language_support(self.entries.len(), syntax)
            }
            Extension::FontSize(size) => self.set_font_size(size),
            other => self.entries.push(other),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/config.rs"]
mod tests;
