//! Card-level enums shared by the layout engine and the compositor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five elemental card families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Fire,
    Water,
    Air,
    Earth,
    Dragon,
}

impl Family {
    /// All families in display order.
    pub const ALL: [Self; 5] = [Self::Fire, Self::Water, Self::Air, Self::Earth, Self::Dragon];

    /// Lowercase asset name (`bg_<name>.png`, `icon_<name>.png`).
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Air => "air",
            Self::Earth => "earth",
            Self::Dragon => "dragon",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

/// Ability category. Selects the marker icon drawn beside the ability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityKind {
    Immediate,
    #[default]
    Continuous,
    Periodic,
}

/// One ability: its kind tag and raw text with inline bracket codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityBlock {
    pub kind: AbilityKind,
    pub text: String,
}

impl AbilityBlock {
    pub fn new(kind: AbilityKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
