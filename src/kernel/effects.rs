use crate::kernel::editor::config::{Distortion, Extension, FontSize, SessionConfig};
use crate::kernel::services::ports::surface::{EditingSurface, TextEdit};

pub const GROW_FACTOR: f32 = 2.0;
pub const SHRINK_FACTOR: f32 = 0.5;

/// Game-specific halves of the delete-type and visual-distortion abilities.
pub trait EffectHandlers: Send {
    /// The one-shot edit delete-type performs, if any.
    fn delete(&mut self, surface: &dyn EditingSurface) -> Option<TextEdit>;

    /// Perturbs the configuration in place; the session reapplies it afterwards.
    fn distort(&mut self, config: &mut SessionConfig);
}

/// Deletes the text of the last non-blank line; distortion layers a flashbang theme.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEffects;

impl EffectHandlers for DefaultEffects {
    fn delete(&mut self, surface: &dyn EditingSurface) -> Option<TextEdit> {
        let chars: Vec<char> = surface.text().chars().collect();
        (1..=surface.line_count())
            .rev()
            .filter_map(|number| surface.line(number))
            .find(|info| {
                chars
                    .get(info.from..info.to)
                    .is_some_and(|line| line.iter().any(|c| !c.is_whitespace()))
            })
            .map(|info| TextEdit::delete(info.from, info.to))
    }

    fn distort(&mut self, config: &mut SessionConfig) {
        let flashbang = Extension::Distortion(Distortion::Flashbang);
        if !config.contains(&flashbang) {
            config.push(flashbang);
        }
    }
}

pub fn grow(config: &mut SessionConfig) {
    config.set_font_size(FontSize::Scaled(GROW_FACTOR));
}

pub fn shrink(config: &mut SessionConfig) {
    config.set_font_size(FontSize::Scaled(SHRINK_FACTOR));
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/effects.rs"]
mod tests;
