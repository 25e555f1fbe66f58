//! Rules actions: spellcasting, wild shape, hit dice and rests.

use tracing::{debug, info, warn};

use super::SheetEngine;
use crate::action::{ActionError, ActionResult};
use crate::state::Spell;

impl SheetEngine<'_> {
    /// Cast `spell`, consuming one slot of its level.
    ///
    /// Cantrips never use slots and always succeed without changing state.
    pub fn cast_spell(&mut self, spell: &Spell) -> Result<ActionResult, ActionError> {
        if spell.is_cantrip() {
            debug!(spell = %spell.name, "cantrips don't use slots");
            return Ok(ActionResult::CantripCast);
        }

        let level = spell.level;
        let pool = self.sheet.spell_slots.pool_mut(level);
        if !pool.try_spend() {
            warn!(
                spell = %spell.name,
                level = level.index(),
                used = pool.used,
                max = pool.max,
                "out of spell slots"
            );
            return Err(ActionError::OutOfSpellSlots { level });
        }

        info!(
            spell = %spell.name,
            level = level.index(),
            used = pool.used,
            max = pool.max,
            "spell cast"
        );
        Ok(ActionResult::SlotUsed {
            level,
            remaining: pool.remaining(),
        })
    }

    /// Use one wild-shape charge.
    pub fn apply_wild_shape(&mut self) -> Result<ActionResult, ActionError> {
        let pool = &mut self.sheet.wild_shape;
        if !pool.try_spend() {
            warn!(used = pool.used, max = pool.max, "cannot use wild shape");
            return Err(ActionError::WildShapeExhausted);
        }

        info!(used = pool.used, max = pool.max, "wild shape used");
        Ok(ActionResult::WildShaped {
            remaining: pool.remaining(),
        })
    }

    /// Spend one hit die and heal by `roll`, never above maximum HP.
    pub fn spend_hit_die(&mut self, roll: u32) -> Result<ActionResult, ActionError> {
        let combat = &mut self.sheet.combat;
        if !combat.hit_dice.try_spend() {
            warn!(roll, "no hit dice remaining");
            return Err(ActionError::NoHitDice);
        }

        let healed = combat.hp.heal(roll);
        info!(
            roll,
            healed,
            hp = combat.hp.current,
            max_hp = combat.hp.max,
            dice_remaining = combat.hit_dice.remaining,
            "hit die spent"
        );
        Ok(ActionResult::HitDieSpent {
            healed,
            dice_remaining: combat.hit_dice.remaining,
        })
    }

    /// Short rest: wild-shape charges come back.
    ///
    /// Slot recovery on a short rest (Natural Recovery) is not applied.
    pub fn short_rest(&mut self) -> ActionResult {
        self.sheet.wild_shape.restore();
        info!("short rest complete: wild shape charges restored");
        ActionResult::ShortRested
    }

    /// Long rest: slots, HP and wild shape restored; half the hit dice
    /// (at least one) recovered, never above the character level.
    pub fn long_rest(&mut self) -> ActionResult {
        let level = self.sheet.level();
        let sheet = &mut *self.sheet;

        sheet.spell_slots.restore_all();

        let hp_before = sheet.combat.hp.current;
        sheet.combat.hp.restore();
        let hp_restored = sheet.combat.hp.current.saturating_sub(hp_before);

        let hit_dice_recovered = sheet.combat.hit_dice.recover_half(level);

        sheet.wild_shape.restore();

        info!(
            hp_restored,
            hit_dice_recovered,
            dice_remaining = sheet.combat.hit_dice.remaining,
            "long rest complete: HP and spells restored"
        );
        ActionResult::LongRested {
            hp_restored,
            hit_dice_recovered,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::action::{ActionError, ActionResult};
    use crate::config::SheetConfig;
    use crate::engine::SheetEngine;
    use crate::state::fixtures::druid;
    use crate::state::{Spell, SpellLevel};

    #[test]
    fn casting_first_level_spell_uses_one_slot() {
        let mut sheet = druid();
        let config = SheetConfig::default();
        let cure = Spell::new("Cure Wounds", SpellLevel::First);

        let result = SheetEngine::new(&mut sheet, &config).cast_spell(&cure);

        assert_eq!(
            result,
            Ok(ActionResult::SlotUsed {
                level: SpellLevel::First,
                remaining: 3,
            })
        );
        assert_eq!(sheet.spell_slots.pool(SpellLevel::First).used, 1);
        assert_eq!(sheet.spell_slots.pool(SpellLevel::Second).used, 0);
    }

    #[test]
    fn casting_with_no_slots_left_is_declined() {
        let mut sheet = druid();
        let config = SheetConfig::default();
        let moonbeam = Spell::new("Moonbeam", SpellLevel::Second);
        let mut engine = SheetEngine::new(&mut sheet, &config);

        assert!(engine.cast_spell(&moonbeam).is_ok());
        assert!(engine.cast_spell(&moonbeam).is_ok());
        let before = engine.sheet().clone();
        assert_eq!(
            engine.cast_spell(&moonbeam),
            Err(ActionError::OutOfSpellSlots {
                level: SpellLevel::Second
            })
        );
        assert_eq!(engine.sheet(), &before);
        assert_eq!(sheet.spell_slots.pool(SpellLevel::Second).used, 2);
    }

    #[test]
    fn third_level_pool_with_zero_max_declines() {
        let mut sheet = druid();
        let config = SheetConfig::default();
        let spell = Spell::new("Call Lightning", SpellLevel::Third);

        let result = SheetEngine::new(&mut sheet, &config).cast_spell(&spell);

        assert_eq!(
            result,
            Err(ActionError::OutOfSpellSlots {
                level: SpellLevel::Third
            })
        );
    }

    #[test]
    fn cantrips_change_nothing() {
        let mut sheet = druid();
        let before = sheet.clone();
        let config = SheetConfig::default();
        let guidance = Spell::new("Guidance", SpellLevel::Cantrip);

        let result = SheetEngine::new(&mut sheet, &config).cast_spell(&guidance);

        assert_eq!(result, Ok(ActionResult::CantripCast));
        assert_eq!(sheet, before);
    }

    #[test]
    fn wild_shape_stops_at_max() {
        let mut sheet = druid();
        let config = SheetConfig::default();
        let mut engine = SheetEngine::new(&mut sheet, &config);

        assert_eq!(
            engine.apply_wild_shape(),
            Ok(ActionResult::WildShaped { remaining: 1 })
        );
        assert_eq!(
            engine.apply_wild_shape(),
            Ok(ActionResult::WildShaped { remaining: 0 })
        );
        assert_eq!(
            engine.apply_wild_shape(),
            Err(ActionError::WildShapeExhausted)
        );
        assert_eq!(sheet.wild_shape.used, 2);
    }

    #[test]
    fn hit_die_heal_is_clamped_to_max() {
        let mut sheet = druid();
        sheet.combat.hp.current = 10;
        let config = SheetConfig::default();

        let result = SheetEngine::new(&mut sheet, &config).spend_hit_die(20);

        assert_eq!(
            result,
            Ok(ActionResult::HitDieSpent {
                healed: 14,
                dice_remaining: 2,
            })
        );
        assert_eq!(sheet.combat.hp.current, 24);
    }

    #[test]
    fn hit_die_heal_below_max_adds_roll() {
        let mut sheet = druid();
        sheet.combat.hp.current = 10;
        let config = SheetConfig::default();

        SheetEngine::new(&mut sheet, &config)
            .spend_hit_die(6)
            .expect("a hit die is available");

        assert_eq!(sheet.combat.hp.current, 16);
        assert_eq!(sheet.combat.hit_dice.remaining, 2);
    }

    #[test]
    fn no_hit_dice_is_declined() {
        let mut sheet = druid();
        sheet.combat.hit_dice.remaining = 0;
        sheet.combat.hp.current = 5;
        let before = sheet.clone();
        let config = SheetConfig::default();

        let result = SheetEngine::new(&mut sheet, &config).spend_hit_die(8);

        assert_eq!(result, Err(ActionError::NoHitDice));
        assert_eq!(sheet, before);
    }

    #[test]
    fn short_rest_restores_wild_shape_only() {
        let mut sheet = druid();
        sheet.wild_shape.used = 2;
        sheet.spell_slots.pool_mut(SpellLevel::First).used = 3;
        sheet.combat.hp.current = 4;
        let config = SheetConfig::default();

        let result = SheetEngine::new(&mut sheet, &config).short_rest();

        assert_eq!(result, ActionResult::ShortRested);
        assert_eq!(sheet.wild_shape.used, 0);
        assert_eq!(sheet.spell_slots.pool(SpellLevel::First).used, 3);
        assert_eq!(sheet.combat.hp.current, 4);
    }

    #[test]
    fn long_rest_restores_everything() {
        let mut sheet = druid();
        sheet.wild_shape.used = 2;
        sheet.spell_slots.pool_mut(SpellLevel::First).used = 4;
        sheet.spell_slots.pool_mut(SpellLevel::Second).used = 1;
        sheet.combat.hp.current = 3;
        sheet.combat.hit_dice.remaining = 0;
        let config = SheetConfig::default();

        let result = SheetEngine::new(&mut sheet, &config).long_rest();

        assert_eq!(
            result,
            ActionResult::LongRested {
                hp_restored: 21,
                hit_dice_recovered: 1,
            }
        );
        assert!(sheet.spell_slots.iter().all(|(_, pool)| pool.used == 0));
        assert_eq!(sheet.combat.hp.current, 24);
        assert_eq!(sheet.combat.hit_dice.remaining, 1);
        assert_eq!(sheet.wild_shape.used, 0);
    }

    #[test]
    fn long_rest_hit_dice_capped_at_level() {
        let mut sheet = druid();
        sheet.info.level = 8;
        sheet.combat.hit_dice.remaining = 6;
        let config = SheetConfig::default();

        let result = SheetEngine::new(&mut sheet, &config).long_rest();

        assert_eq!(
            result,
            ActionResult::LongRested {
                hp_restored: 0,
                hit_dice_recovered: 2,
            }
        );
        assert_eq!(sheet.combat.hit_dice.remaining, 8);
    }

    #[test]
    fn long_rest_on_overfull_hit_points_pulls_current_to_max() {
        let mut sheet = druid();
        sheet.combat.hp.current = 30;
        let config = SheetConfig::default();

        let result = SheetEngine::new(&mut sheet, &config).long_rest();

        assert_eq!(
            result,
            ActionResult::LongRested {
                hp_restored: 0,
                hit_dice_recovered: 0,
            }
        );
        assert_eq!(sheet.combat.hp.current, 24);
    }
}
