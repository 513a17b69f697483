use crate::kernel::editor::config::SessionConfig;
use crate::kernel::problems::Diagnostic;

/// Replace the char range `from..to` with `insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub from: usize,
    pub to: usize,
    pub insert: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            from: at,
            to: at,
            insert: text.into(),
        }
    }

    pub fn delete(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            insert: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum StateEffect {
    Reconfigure(SessionConfig),
    SetDiagnostics(Vec<Diagnostic>),
}

#[derive(Debug, Clone, Default)]
pub struct Transaction {
    pub changes: Vec<TextEdit>,
    pub effects: Vec<StateEffect>,
}

impl Transaction {
    pub fn edit(edit: TextEdit) -> Self {
        Self {
            changes: vec![edit],
            effects: Vec::new(),
        }
    }

    pub fn reconfigure(config: &SessionConfig) -> Self {
        Self {
            changes: Vec::new(),
            effects: vec![StateEffect::Reconfigure(config.clone())],
        }
    }

    pub fn diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            changes: Vec::new(),
            effects: vec![StateEffect::SetDiagnostics(diagnostics)],
        }
    }
}

/// 1-based line metadata; `from..to` excludes the line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    pub number: usize,
    pub from: usize,
    pub to: usize,
}

/// The live text-editing widget a session drives.
pub trait EditingSurface {
    /// Replaces document and configuration wholesale. Not reported as a document change.
    fn set_state(&mut self, doc: &str, config: &SessionConfig);

    fn text(&self) -> String;

    fn line_count(&self) -> usize;

    fn line(&self, number: usize) -> Option<LineInfo>;

    /// Applies a transaction and reports whether the document text changed.
    fn dispatch(&mut self, tx: Transaction) -> bool;

    fn diagnostics(&self) -> &[Diagnostic];

    fn config(&self) -> &SessionConfig;
}
