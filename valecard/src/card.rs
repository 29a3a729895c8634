//! TOML card documents.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use valecard_core::{AbilityBlock, AbilityKind, Family, StyleConfig};

use crate::error::{Error, Result};

pub const MAX_COST: u32 = 12;
const MIN_CREATURE_SCALE: f32 = 0.5;
const MAX_CREATURE_SCALE: f32 = 1.8;

/// Everything needed to draw one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDoc {
    pub name: String,
    pub family: Family,
    pub cost: u32,
    /// Creature artwork, relative to the card file.
    pub creature: Option<PathBuf>,
    /// Centre of the creature box as card fractions.
    pub creature_center: [f32; 2],
    pub creature_scale: f32,
    #[serde(rename = "ability")]
    pub abilities: Vec<AbilityDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityDoc {
    #[serde(default)]
    pub kind: AbilityKind,
    pub text: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

impl Default for CardDoc {
    fn default() -> Self {
        Self {
            name: String::from("Creature"),
            family: Family::Earth,
            cost: 2,
            creature: None,
            creature_center: [0.5, 0.46],
            creature_scale: 1.0,
            abilities: Vec::new(),
        }
    }
}

impl CardDoc {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut card: Self = toml::from_str(&data).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(creature), Some(dir)) = (&card.creature, path.parent()) {
            if creature.is_relative() {
                card.creature = Some(dir.join(creature));
            }
        }
        log::debug!(
            "card: {:?} ({}, cost {}, {} abilities)",
            card.name,
            card.family,
            card.cost(),
            card.abilities.len()
        );
        Ok(card)
    }

    /// Cost clamped to the printable range.
    pub fn cost(&self) -> u32 {
        self.cost.min(MAX_COST)
    }

    /// File name of the cost badge, e.g. `cost_Earth_2_top.png`.
    pub fn cost_image_name(&self) -> String {
        let name = self.family.asset_name();
        let mut chars = name.chars();
        let capitalized: String = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .into_iter()
            .chain(chars)
            .collect();
        format!("cost_{capitalized}_{}_top.png", self.cost())
    }

    /// Enabled abilities in document order.
    pub fn ability_blocks(&self) -> Vec<AbilityBlock> {
        self.abilities
            .iter()
            .filter(|a| a.enabled)
            .map(|a| AbilityBlock::new(a.kind, a.text.as_str()))
            .collect()
    }

    /// Creature box as card fractions `(cx, cy, w, h)`.
    pub fn creature_box(&self, style: &StyleConfig) -> (f32, f32, f32, f32) {
        let scale = if self.creature_scale.is_finite() {
            self.creature_scale.clamp(MIN_CREATURE_SCALE, MAX_CREATURE_SCALE)
        } else {
            1.0
        };
        let [cx, cy] = self.creature_center;
        (
            cx,
            cy,
            style.creature_w_frac * scale,
            style.creature_h_frac * scale,
        )
    }
}
