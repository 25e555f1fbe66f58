//! Character sheet state.
//!
//! [`CharacterSheet`] owns every stored value. Derived values are exposed as
//! accessor methods that recompute from the stored inputs on each call, so
//! they can never drift out of sync with the scores and level they depend on.
//! Mutation goes through [`crate::SheetEngine`].

mod character;
mod combat;
pub mod delta;
mod error;
mod gear;
mod spellcasting;

pub use character::CharacterInfo;
pub use combat::CombatState;
pub use delta::{SheetDelta, SheetFields};
pub use error::InitializationError;
pub use gear::{Currency, Feature, InventoryItem, Proficiencies, Weapon};
pub use spellcasting::{
    Spell, SpellLevel, SpellSlots, SpellcastingState, TooManySlotLevels, UnknownSpellLevel,
};

use crate::config::SheetConfig;
use crate::stats::{self, Ability, AbilityScores, DeathSaves, Modifiers, ResourcePool};

/// Complete state of one adventurer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    pub info: CharacterInfo,
    pub abilities: AbilityScores,
    pub combat: CombatState,
    pub spellcasting: SpellcastingState,
    pub spell_slots: SpellSlots,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: Vec<Spell>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapons: Vec<Weapon>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<InventoryItem>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub currency: Currency,
    #[cfg_attr(feature = "serde", serde(default))]
    pub proficiencies: Proficiencies,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Vec<Feature>,
    /// Proficiency in the Perception skill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub perception_proficient: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wild_shape: ResourcePool,
}

impl CharacterSheet {
    pub fn new(info: CharacterInfo, abilities: AbilityScores, combat: CombatState) -> Self {
        Self {
            info,
            abilities,
            combat,
            ..Self::default()
        }
    }

    pub fn level(&self) -> u32 {
        self.info.level
    }

    // ===== derived values =====

    pub fn modifiers(&self) -> Modifiers {
        Modifiers::compute(&self.abilities)
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    pub fn proficiency_bonus(&self) -> i32 {
        stats::proficiency_bonus(self.info.level)
    }

    pub fn perception(&self) -> i32 {
        stats::skill_bonus(
            self.modifier(Ability::Wisdom),
            self.proficiency_bonus(),
            self.perception_proficient,
        )
    }

    pub fn passive_perception(&self) -> i32 {
        stats::passive_score(self.perception())
    }

    pub fn initiative(&self) -> i32 {
        self.modifier(Ability::Dexterity)
    }

    pub fn spell_save_dc(&self) -> i32 {
        stats::spell_save_dc(
            self.proficiency_bonus(),
            self.modifier(self.spellcasting.ability),
        )
    }

    pub fn spell_attack_bonus(&self) -> i32 {
        stats::spell_attack_bonus(
            self.proficiency_bonus(),
            self.modifier(self.spellcasting.ability),
        )
    }

    pub fn wild_shape_remaining(&self) -> u32 {
        self.wild_shape.remaining()
    }

    /// Hit-dice maximum; always equal to the character level.
    pub fn hit_dice_max(&self) -> u32 {
        self.info.level
    }

    pub fn weapon_attack_bonus(&self, weapon: &Weapon) -> i32 {
        stats::skill_bonus(
            self.modifier(weapon.ability),
            self.proficiency_bonus(),
            weapon.proficient,
        )
    }

    pub fn weapon_damage_bonus(&self, weapon: &Weapon) -> i32 {
        self.modifier(weapon.ability)
    }

    /// Sum of inventory weights in pounds.
    pub fn carried_weight(&self) -> u32 {
        self.inventory
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.weight))
    }

    // ===== load-time validation =====

    /// Check every sheet invariant against `config`.
    ///
    /// Called once at character-load time; the engine preserves the
    /// invariants afterwards.
    pub fn validate(&self, config: &SheetConfig) -> Result<(), InitializationError> {
        let level = self.info.level;
        let max_level = config.level_cap();
        if !(1..=max_level).contains(&level) {
            return Err(InitializationError::LevelOutOfRange {
                level,
                max: max_level,
            });
        }

        let (min, max) = config.ability_bounds();
        for (ability, score) in self.abilities.iter() {
            if !(min..=max).contains(&score) {
                return Err(InitializationError::AbilityOutOfRange {
                    ability,
                    score,
                    min,
                    max,
                });
            }
        }

        let hp = &self.combat.hp;
        if hp.max == 0 {
            return Err(InitializationError::MaxHitPointsZero);
        }
        if hp.current > hp.max {
            return Err(InitializationError::HitPointsExceedMax {
                current: hp.current,
                max: hp.max,
            });
        }

        let remaining = self.combat.hit_dice.remaining;
        if remaining > level {
            return Err(InitializationError::HitDiceExceedLevel { remaining, level });
        }

        for (spell_level, pool) in self.spell_slots.iter() {
            if pool.used > pool.max {
                return Err(InitializationError::SpellSlotsOverdrawn {
                    level: spell_level,
                    used: pool.used,
                    max: pool.max,
                });
            }
        }

        if self.wild_shape.used > self.wild_shape.max {
            return Err(InitializationError::WildShapeOverdrawn {
                used: self.wild_shape.used,
                max: self.wild_shape.max,
            });
        }

        let saves = &self.combat.death_saves;
        if saves.successes > DeathSaves::MAX || saves.failures > DeathSaves::MAX {
            return Err(InitializationError::DeathSavesOutOfRange {
                successes: saves.successes,
                failures: saves.failures,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::stats::{HitDice, HitDie, HitPoints};

    /// Third-level druid: WIS 16, 24 HP, 4/2 slots, two wild-shape charges.
    pub(crate) fn druid() -> CharacterSheet {
        let mut sheet = CharacterSheet::new(
            CharacterInfo::new("Zorya Yaroslava", "Druid", 3),
            AbilityScores::new(10, 14, 12, 10, 16, 8),
            CombatState::new(HitPoints::at_max(24), 16, 30, HitDice::new(HitDie::D8, 3)),
        );
        sheet.spell_slots = SpellSlots::with_maximums(4, 2, 0);
        sheet.spells = vec![
            Spell::new("Guidance", SpellLevel::Cantrip).prepared(),
            Spell::new("Cure Wounds", SpellLevel::First)
                .prepared()
                .with_details("Touch", "1 Action", "Heals 1d8 + WIS modifier."),
            Spell::new("Moonbeam", SpellLevel::Second),
        ];
        sheet.weapons = vec![
            Weapon::new("Scimitar", Ability::Dexterity, "1d6")
                .proficient()
                .with_kind("Slashing"),
        ];
        sheet.inventory = vec![
            InventoryItem::new("Leather Armor", 10),
            InventoryItem::new("Wooden Shield", 6),
            InventoryItem::new("Druidic Focus", 1),
        ];
        sheet.currency = Currency::new(15, 10, 0);
        sheet.features = vec![Feature::new(
            "Wild Shape",
            "Assume the shape of a beast you have seen. Recharges on a short rest.",
        )];
        sheet.perception_proficient = true;
        sheet.wild_shape = ResourcePool::full(2);
        sheet
    }
}
