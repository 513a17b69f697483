use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kernel::language::{LanguageId, LanguageRegistry, LanguageSpec};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<LanguageId>,
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
    #[serde(default = "default_base_font_px")]
    pub base_font_px: f32,
    #[serde(default = "default_syntax_disable_secs")]
    pub syntax_disable_secs: u64,
    /// Language identifier -> regex whose first capture group is the error line.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub error_patterns: BTreeMap<String, String>,
}

fn default_tab_size() -> usize {
    4
}

fn default_base_font_px() -> f32 {
    14.0
}

fn default_syntax_disable_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: None,
            tab_size: default_tab_size(),
            base_font_px: default_base_font_px(),
            syntax_disable_secs: default_syntax_disable_secs(),
            error_patterns: BTreeMap::new(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownLanguage(String),
    InvalidPattern {
        language: LanguageId,
        source: regex::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownLanguage(name) => write!(f, "Unknown language: {}", name),
            ConfigError::InvalidPattern { language, source } => {
                write!(f, "Invalid error pattern for {}: {}", language, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPattern { source, .. } => Some(source),
            ConfigError::UnknownLanguage(_) => None,
        }
    }
}

impl Settings {
    pub fn syntax_disable_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.syntax_disable_secs)
    }

    /// Builtin registry with the configured pattern overrides applied.
    pub fn build_registry(&self) -> Result<LanguageRegistry, ConfigError> {
        let mut registry = LanguageRegistry::builtin();
        for (name, pattern) in &self.error_patterns {
            let language = LanguageId::from_name(name)
                .ok_or_else(|| ConfigError::UnknownLanguage(name.clone()))?;
            let spec = LanguageSpec::with_pattern(language, pattern).map_err(|source| {
                ConfigError::InvalidPattern { language, source }
            })?;
            registry.register(spec);
        }
        Ok(registry)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
