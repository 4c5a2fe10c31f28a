use serde::{Deserialize, Deserializer, Serialize};

use crate::benefit::{apply_benefit_delta, clamp_benefit};

/// Category names with a dedicated rule. Any other name follows the standard rule.
pub mod names {
    pub const HERBAL_TEA: &str = "Herbal Tea";
    pub const FERVEX: &str = "Fervex";
    pub const MAGIC_PILL: &str = "Magic Pill";
    pub const DAFALGAN: &str = "Dafalgan";
}

/// A single stocked item tracked by the simulation.
///
/// `benefit` is private so every write goes through the clamping helpers; the
/// value is within `[MIN_BENEFIT, MAX_BENEFIT]` whenever it can be observed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "category")]
    pub name: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
    #[serde(deserialize_with = "deserialize_benefit")]
    benefit: u8,
}

impl Item {
    /// Build an item, clamping `benefit` into range.
    pub fn new(name: impl Into<String>, expires_in: i64, benefit: i64) -> Self {
        Self {
            name: name.into(),
            expires_in,
            benefit: clamp_benefit(benefit),
        }
    }

    pub fn benefit(&self) -> u8 {
        self.benefit
    }

    pub fn is_expired(&self) -> bool {
        self.expires_in < 0
    }

    /// Add a signed delta to the benefit, clamped into range.
    pub fn adjust_benefit(&mut self, delta: i32) {
        self.benefit = apply_benefit_delta(self.benefit, delta);
    }

    /// Overwrite the benefit, clamped into range.
    pub fn set_benefit(&mut self, value: i64) {
        self.benefit = clamp_benefit(value);
    }
}

fn deserialize_benefit<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_benefit(raw))
}
