//! Ability catalog and the keyword scanner run on document changes.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityKind {
    DeleteType,
    DisableSyntax,
    VisualDistortion,
    Grow,
    Shrink,
}

impl AbilityKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::DeleteType => "delete-type",
            Self::DisableSyntax => "disable-syntax",
            Self::VisualDistortion => "visual-distortion",
            Self::Grow => "grow",
            Self::Shrink => "shrink",
        }
    }

    /// Accepts either the ability id or its trigger keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        ABILITIES
            .iter()
            .find(|ability| ability.kind.id() == name || ability.trigger == name)
            .map(|ability| ability.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ability {
    pub kind: AbilityKind,
    pub trigger: &'static str,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        self.kind.id()
    }
}

/// Ordered; earlier entries win when several keywords are present.
pub const ABILITIES: [Ability; 5] = [
    Ability {
        kind: AbilityKind::DeleteType,
        trigger: "deletio",
    },
    Ability {
        kind: AbilityKind::DisableSyntax,
        trigger: "syntaxio",
    },
    Ability {
        kind: AbilityKind::VisualDistortion,
        trigger: "lightio",
    },
    Ability {
        kind: AbilityKind::Grow,
        trigger: "hugio",
    },
    Ability {
        kind: AbilityKind::Shrink,
        trigger: "smallio",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityMatch<'a> {
    pub ability: &'a Ability,
    /// Char range of the keyword's first occurrence.
    pub range: Range<usize>,
}

pub fn scan<'a>(text: &str, catalog: &'a [Ability]) -> Option<AbilityMatch<'a>> {
    catalog.iter().find_map(|ability| {
        if ability.trigger.is_empty() {
            return None;
        }
        let byte_start = text.find(ability.trigger)?;
        let start = text[..byte_start].chars().count();
        let end = start + ability.trigger.chars().count();
        Some(AbilityMatch {
            ability,
            range: start..end,
        })
    })
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/abilities.rs"]
mod tests;
