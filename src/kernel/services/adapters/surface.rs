//! Headless editing surface backed by a rope.

use crate::kernel::editor::config::SessionConfig;
use crate::kernel::editor::syntax::SyntaxDocument;
use crate::kernel::problems::Diagnostic;
use crate::kernel::services::ports::surface::{
    EditingSurface, LineInfo, StateEffect, TextEdit, Transaction,
};
use ropey::Rope;

#[derive(Debug, Default)]
pub struct RopeSurface {
    rope: Rope,
    config: SessionConfig,
    diagnostics: Vec<Diagnostic>,
    syntax: Option<SyntaxDocument>,
    version: u64,
}

impl RopeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Parsed tree for the configured language; `None` while language support is absent.
    pub fn syntax(&self) -> Option<&SyntaxDocument> {
        self.syntax.as_ref()
    }

    /// Bumped on every document change.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn font_px(&self, base_px: f32) -> f32 {
        self.config.font_size().px(base_px)
    }

    fn apply_changes(&mut self, mut changes: Vec<TextEdit>) -> bool {
        // Later ranges first so earlier offsets stay valid.
        changes.sort_by(|a, b| b.from.cmp(&a.from));

        let mut changed = false;
        for edit in changes {
            let len = self.rope.len_chars();
            let from = edit.from.min(len);
            let to = edit.to.clamp(from, len);
            if from == to && edit.insert.is_empty() {
                continue;
            }
            if from < to {
                self.rope.remove(from..to);
            }
            if !edit.insert.is_empty() {
                self.rope.insert(from, &edit.insert);
            }
            changed = true;
        }
        changed
    }

    fn sync_syntax(&mut self) {
        match self.config.syntax_support() {
            Some(support) => match self.syntax.as_mut() {
                Some(doc) if doc.support() == support => doc.reparse(&self.rope),
                _ => self.syntax = support.parse(&self.rope),
            },
            None => self.syntax = None,
        }
    }

    fn clamp_diagnostics(&mut self) {
        let len = self.rope.len_chars();
        for diagnostic in &mut self.diagnostics {
            diagnostic.from = diagnostic.from.min(len);
            diagnostic.to = diagnostic.to.clamp(diagnostic.from, len);
        }
    }
}

impl EditingSurface for RopeSurface {
    fn set_state(&mut self, doc: &str, config: &SessionConfig) {
        self.rope = Rope::from_str(doc);
        self.config = config.clone();
        self.diagnostics.clear();
        self.syntax = None;
        self.sync_syntax();
    }

    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, number: usize) -> Option<LineInfo> {
        if number == 0 || number > self.rope.len_lines() {
            return None;
        }
        let row = number - 1;
        let from = self.rope.line_to_char(row);
        let line = self.rope.line(row);
        let mut len = line.len_chars();
        while len > 0 && is_line_break(line.char(len - 1)) {
            len -= 1;
        }
        Some(LineInfo {
            number,
            from,
            to: from + len,
        })
    }

    fn dispatch(&mut self, tx: Transaction) -> bool {
        let changed = self.apply_changes(tx.changes);
        let mut reconfigured = false;

        for effect in tx.effects {
            match effect {
                StateEffect::Reconfigure(config) => {
                    self.config = config;
                    reconfigured = true;
                }
                StateEffect::SetDiagnostics(diagnostics) => self.diagnostics = diagnostics,
            }
        }

        if changed {
            self.version = self.version.wrapping_add(1);
            self.clamp_diagnostics();
        }
        if changed || reconfigured {
            self.sync_syntax();
        }
        changed
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn config(&self) -> &SessionConfig {
        &self.config
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/surface.rs"]
mod tests;
