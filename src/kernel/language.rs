use regex::Regex;
use rustc_hash::FxHashMap;

use crate::kernel::editor::syntax::SyntaxSupport;

/// Fallback used for languages without their own pattern and for traceback scans.
pub const GENERIC_LINE_PATTERN: &str = r"line\s+(\d+)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Java,
    Cpp,
    C,
    #[serde(rename = "javascript")]
    JavaScript,
    Rust,
    Go,
}

impl LanguageId {
    pub const ALL: [Self; 7] = [
        Self::Python,
        Self::Java,
        Self::Cpp,
        Self::C,
        Self::JavaScript,
        Self::Rust,
        Self::Go,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::JavaScript => "javascript",
            Self::Rust => "rust",
            Self::Go => "go",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(name))
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::C => "C",
            Self::JavaScript => "JavaScript",
            Self::Rust => "Rust",
            Self::Go => "Go",
        }
    }

    /// Line-number pattern for the compiler/interpreter output of this language.
    pub fn builtin_error_pattern(self) -> &'static str {
        match self {
            Self::Python => GENERIC_LINE_PATTERN,
            Self::Java => r"\.java:(\d+):",
            Self::Cpp | Self::C => r"(\d+)\s*\|",
            Self::JavaScript => r"\.(?:js|mjs|cjs):(\d+)",
            Self::Rust => r"-->\s*[^\s:]+:(\d+):\d+",
            Self::Go => r"\.go:(\d+):",
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct LanguageSpec {
    pub id: LanguageId,
    pub syntax: SyntaxSupport,
    pub error_pattern: Regex,
}

impl LanguageSpec {
    pub fn builtin(id: LanguageId) -> Self {
        Self {
            id,
            syntax: SyntaxSupport::new(id),
            error_pattern: compile_static(id.builtin_error_pattern()),
        }
    }

    pub fn with_pattern(id: LanguageId, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            id,
            syntax: SyntaxSupport::new(id),
            error_pattern: Regex::new(pattern)?,
        })
    }
}

/// Process-wide table of supported languages. Lookups never branch on the language.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    order: Vec<LanguageId>,
    specs: FxHashMap<LanguageId, LanguageSpec>,
    generic: Regex,
}

impl LanguageRegistry {
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            specs: FxHashMap::default(),
            generic: compile_static(GENERIC_LINE_PATTERN),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for id in LanguageId::ALL {
            registry.register(LanguageSpec::builtin(id));
        }
        registry
    }

    /// Adds or replaces a language. Replacing keeps the original registration order.
    pub fn register(&mut self, spec: LanguageSpec) {
        if !self.specs.contains_key(&spec.id) {
            self.order.push(spec.id);
        }
        self.specs.insert(spec.id, spec);
    }

    pub fn get(&self, id: LanguageId) -> Option<&LanguageSpec> {
        self.specs.get(&id)
    }

    pub fn contains(&self, id: LanguageId) -> bool {
        self.specs.contains_key(&id)
    }

    pub fn languages(&self) -> &[LanguageId] {
        &self.order
    }

    pub fn default_language(&self) -> LanguageId {
        self.order.first().copied().unwrap_or(LanguageId::Python)
    }

    pub fn error_pattern(&self, id: LanguageId) -> &Regex {
        self.specs
            .get(&id)
            .map(|spec| &spec.error_pattern)
            .unwrap_or(&self.generic)
    }

    pub fn generic_pattern(&self) -> &Regex {
        &self.generic
    }

    pub fn syntax(&self, id: LanguageId) -> SyntaxSupport {
        self.specs
            .get(&id)
            .map(|spec| spec.syntax)
            .unwrap_or_else(|| SyntaxSupport::new(id))
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn compile_static(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("builtin pattern {pattern:?} is invalid: {e}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
