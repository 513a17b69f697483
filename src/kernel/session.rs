//! Editor session controller.
//!
//! Owns the active language and the session configuration, drives a linked editing surface,
//! and routes diagnostics and abilities. Only `tick()` applies work that was scheduled earlier.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::kernel::abilities::{self, AbilityKind, ABILITIES};
use crate::kernel::diagnostics;
use crate::kernel::editor::config::SessionConfig;
use crate::kernel::effects::{self, DefaultEffects, EffectHandlers};
use crate::kernel::language::{LanguageId, LanguageRegistry};
use crate::kernel::services::ports::settings::Settings;
use crate::kernel::services::ports::store::{cache_key, KeyValueStore, SELECTED_LANGUAGE_KEY};
use crate::kernel::services::ports::surface::{EditingSurface, TextEdit, Transaction};
use crate::kernel::timers::{EffectTimers, RestorePoint};

pub type Result<T> = std::result::Result<T, SessionError>;

/// Receives the id of an ability typed into the document.
pub type AbilityCallback = Box<dyn FnMut(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    NotLinked,
    AlreadyLinked,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotLinked => write!(f, "Editor view not linked"),
            SessionError::AlreadyLinked => write!(f, "Editor view already linked"),
        }
    }
}

impl std::error::Error for SessionError {}

pub struct EditorSession<S: EditingSurface> {
    settings: Settings,
    registry: Arc<LanguageRegistry>,
    store: Arc<dyn KeyValueStore>,
    lang: LanguageId,
    config: SessionConfig,
    surface: Option<S>,
    on_ability: Option<AbilityCallback>,
    effects: Box<dyn EffectHandlers>,
    timers: EffectTimers,
}

impl<S: EditingSurface> EditorSession<S> {
    pub fn new(
        settings: Settings,
        registry: Arc<LanguageRegistry>,
        store: Arc<dyn KeyValueStore>,
        runtime: Handle,
    ) -> Self {
        let lang = settings
            .default_language
            .filter(|lang| registry.contains(*lang))
            .unwrap_or_else(|| registry.default_language());
        let config = SessionConfig::initial(registry.syntax(lang), &settings);
        Self {
            settings,
            registry,
            store,
            lang,
            config,
            surface: None,
            on_ability: None,
            effects: Box::new(DefaultEffects),
            timers: EffectTimers::new(runtime),
        }
    }

    pub fn with_effects(mut self, effects: impl EffectHandlers + 'static) -> Self {
        self.effects = Box::new(effects);
        self
    }

    pub fn language(&self) -> LanguageId {
        self.lang
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_linked(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn has_pending_restore(&self) -> bool {
        self.timers.has_pending_restore()
    }

    /// Binds the surface. Restores the last selected language and applies a fresh configuration.
    pub fn link(&mut self, mut surface: S, on_ability: impl FnMut(&str) + 'static) -> Result<()> {
        if self.surface.is_some() {
            return Err(SessionError::AlreadyLinked);
        }

        self.lang = self.restore_language();
        let syntax = self.registry.syntax(self.lang);
        self.config = SessionConfig::initial(syntax, &self.settings);
        surface.set_state("", &self.config);
        self.surface = Some(surface);
        self.on_ability = Some(Box::new(on_ability));
        tracing::info!(lang = %self.lang, "editor linked");
        Ok(())
    }

    /// Detaches the surface, dropping any pending syntax restore.
    pub fn unlink(&mut self) -> Option<S> {
        self.timers.cancel_restore();
        self.on_ability = None;
        self.surface.take()
    }

    pub fn code(&self) -> Result<String> {
        let surface = self.surface.as_ref().ok_or(SessionError::NotLinked)?;
        Ok(surface.text())
    }

    /// Loads `code`, unless a non-blank cached document exists for the active language.
    pub fn set_code(&mut self, code: &str) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(SessionError::NotLinked)?;
        let cached = self
            .store
            .get(&cache_key(self.lang))
            .filter(|cached| !cached.trim().is_empty());
        let from_cache = cached.is_some();
        surface.set_state(cached.as_deref().unwrap_or(code), &self.config);
        tracing::debug!(lang = %self.lang, from_cache, "code loaded");
        self.reapply_language();
        Ok(())
    }

    /// Switches the active language id only; pair with `set_code` to reload the document.
    pub fn set_lang(&mut self, lang: LanguageId) -> Result<()> {
        if self.surface.is_none() {
            return Err(SessionError::NotLinked);
        }
        self.lang = lang;
        self.persist(SELECTED_LANGUAGE_KEY, lang.as_str());
        tracing::info!(lang = %lang, "language selected");
        Ok(())
    }

    /// Annotates the line `error` refers to. Unparseable messages and unlinked sessions are ignored.
    pub fn process_error(&mut self, error: &str, line_offset: i64) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let pattern = self.registry.error_pattern(self.lang);
        let generic = self.registry.generic_pattern();
        let Some(diagnostic) =
            diagnostics::map_error(error, line_offset, pattern, generic, surface)
        else {
            tracing::debug!(lang = %self.lang, "no line found in error output");
            return;
        };
        self.dispatch(Transaction::diagnostics(vec![diagnostic]));
    }

    pub fn reset_error(&mut self) {
        if self.surface.is_none() {
            return;
        }
        self.dispatch(Transaction::diagnostics(Vec::new()));
    }

    /// Runs an ability by id or trigger keyword. Unknown names do nothing.
    pub fn trigger_ability(&mut self, name: &str) -> Result<()> {
        if self.surface.is_none() {
            return Err(SessionError::NotLinked);
        }
        let Some(kind) = AbilityKind::from_name(name) else {
            tracing::debug!(name, "unknown ability");
            return Ok(());
        };

        match kind {
            AbilityKind::DeleteType => {
                let edit = match self.surface.as_ref() {
                    Some(surface) => self.effects.delete(surface),
                    None => None,
                };
                if let Some(edit) = edit {
                    self.dispatch(Transaction::edit(edit));
                }
            }
            AbilityKind::DisableSyntax => self.disable_syntax(),
            AbilityKind::VisualDistortion => {
                self.effects.distort(&mut self.config);
                self.reconfigure();
            }
            AbilityKind::Grow => {
                effects::grow(&mut self.config);
                self.reconfigure();
            }
            AbilityKind::Shrink => {
                effects::shrink(&mut self.config);
                self.reconfigure();
            }
        }

        tracing::info!(ability = kind.id(), "ability triggered");
        Ok(())
    }

    /// Applies a user edit and runs the change handler.
    pub fn apply_edit(&mut self, edit: TextEdit) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(SessionError::NotLinked)?;
        if surface.dispatch(Transaction::edit(edit)) {
            self.document_changed()?;
        }
        Ok(())
    }

    /// Change handler for edits made directly on the surface: persists the document, then
    /// consumes the first ability keyword found in it.
    pub fn document_changed(&mut self) -> Result<()> {
        let surface = self.surface.as_ref().ok_or(SessionError::NotLinked)?;
        let text = surface.text();
        self.persist(&cache_key(self.lang), &text);

        let Some(found) = abilities::scan(&text, &ABILITIES) else {
            return Ok(());
        };
        let name = found.ability.name();
        tracing::info!(ability = name, "ability keyword typed");
        self.dispatch(Transaction::edit(TextEdit::delete(
            found.range.start,
            found.range.end,
        )));
        if let Some(callback) = self.on_ability.as_mut() {
            callback(name);
        }
        Ok(())
    }

    /// Applies timer work that came due. Returns how many restores ran.
    pub fn tick(&mut self) -> usize {
        let due = self.timers.drain_due();
        let count = due.len();
        for point in due {
            self.restore_syntax(point);
        }
        count
    }

    fn disable_syntax(&mut self) {
        let point = match self.config.remove_language_support() {
            Some((index, syntax)) => RestorePoint { index, syntax },
            // Already disabled by an earlier trigger: keep its restore point.
            None => self.timers.pending_point().unwrap_or(RestorePoint {
                index: self.config.len(),
                syntax: self.registry.syntax(self.lang),
            }),
        };
        self.reconfigure();
        self.timers
            .schedule_restore(self.settings.syntax_disable_duration(), point);
    }

    /// Puts the removed entry back into the configuration as it is now, then points it at the
    /// active language's syntax support.
    fn restore_syntax(&mut self, point: RestorePoint) {
        self.config
            .restore_language_support(point.index, point.syntax);
        self.reconfigure();
        self.reapply_language();
        tracing::info!(lang = %self.lang, "syntax support restored");
    }

    fn reapply_language(&mut self) {
        if self.config.set_language_support(self.registry.syntax(self.lang)) {
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.dispatch(Transaction::reconfigure(&self.config));
    }

    fn dispatch(&mut self, tx: Transaction) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let changed = surface.dispatch(tx);
        if changed {
            let text = surface.text();
            self.persist(&cache_key(self.lang), &text);
        }
        changed
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist");
        }
    }

    fn restore_language(&self) -> LanguageId {
        self.store
            .get(SELECTED_LANGUAGE_KEY)
            .and_then(|name| LanguageId::from_name(&name))
            .filter(|lang| self.registry.contains(*lang))
            .or(self.settings.default_language)
            .filter(|lang| self.registry.contains(*lang))
            .unwrap_or_else(|| self.registry.default_language())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
