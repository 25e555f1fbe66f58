//! Combat block: hit points, defenses, hit dice and death saves.

use crate::stats::{DeathSaves, HitDice, HitPoints};

/// Stored combat values. Initiative is derived from DEX on the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub hp: HitPoints,
    pub armor_class: i32,
    /// Walking speed in feet.
    pub speed: u32,
    pub hit_dice: HitDice,
    pub death_saves: DeathSaves,
}

impl CombatState {
    pub fn new(hp: HitPoints, armor_class: i32, speed: u32, hit_dice: HitDice) -> Self {
        Self {
            hp,
            armor_class,
            speed,
            hit_dice,
            death_saves: DeathSaves::default(),
        }
    }
}

impl Default for CombatState {
    /// Unarmored, standard 30 ft speed.
    fn default() -> Self {
        Self::new(HitPoints::default(), 10, 30, HitDice::default())
    }
}
