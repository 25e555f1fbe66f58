//! Equipment, wealth and training lists.

use crate::stats::Ability;

/// A weapon entry. Attack and damage bonuses are derived on the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    /// Ability used for attack and damage rolls (WIS for Shillelagh).
    pub ability: Ability,
    /// Damage dice in tabletop notation, e.g. `1d6`.
    pub damage_die: String,
    pub proficient: bool,
    /// Damage type or weapon category.
    pub kind: String,
}

impl Weapon {
    pub fn new(name: impl Into<String>, ability: Ability, damage_die: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ability,
            damage_die: damage_die.into(),
            proficient: false,
            kind: String::new(),
        }
    }

    pub fn proficient(mut self) -> Self {
        self.proficient = true;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub name: String,
    /// Weight in pounds.
    pub weight: u32,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Coins carried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Currency {
    pub gp: u32,
    pub sp: u32,
    pub cp: u32,
}

impl Currency {
    pub const fn new(gp: u32, sp: u32, cp: u32) -> Self {
        Self { gp, sp, cp }
    }

    /// Total value in copper pieces (1 gp = 10 sp = 100 cp).
    pub const fn total_copper(&self) -> u64 {
        self.gp as u64 * 100 + self.sp as u64 * 10 + self.cp as u64
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proficiencies {
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub armor: Vec<String>,
}

/// A class or background feature shown on the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
