//! Input edits. Every edit is clamped into bounds and keeps the pool
//! invariants (`used <= max`, `current <= max`, hit dice `<= level`).

use tracing::debug;

use super::SheetEngine;
use crate::action::SheetEdit;
use crate::stats::DeathSaves;

impl SheetEngine<'_> {
    /// Apply a form-field edit.
    pub fn apply_edit(&mut self, edit: &SheetEdit) {
        let config = self.config;
        let sheet = &mut *self.sheet;

        match *edit {
            SheetEdit::AbilityScore { ability, score } => {
                let clamped = config.clamp_ability(score);
                if clamped != score {
                    debug!(%ability, score, clamped, "ability score clamped");
                }
                sheet.abilities.set(ability, clamped);
            }
            SheetEdit::Level(level) => {
                let clamped = config.clamp_level(level);
                if clamped != level {
                    debug!(level, clamped, "level clamped");
                }
                sheet.info.level = clamped;
                sheet.combat.hit_dice.clamp_to_level(clamped);
            }
            SheetEdit::CurrentHp(hp) => sheet.combat.hp.set_current(hp),
            SheetEdit::MaxHp(max) => sheet.combat.hp.set_max(max),
            SheetEdit::TempHp(temp) => sheet.combat.hp.temp = temp,
            SheetEdit::ArmorClass(ac) => sheet.combat.armor_class = ac,
            SheetEdit::Speed(speed) => sheet.combat.speed = speed,
            SheetEdit::DeathSaves {
                successes,
                failures,
            } => sheet.combat.death_saves = DeathSaves::new(successes, failures),
            SheetEdit::SlotMax { level, max } => sheet.spell_slots.pool_mut(level).set_max(max),
            SheetEdit::WildShapeMax(max) => sheet.wild_shape.set_max(max),
            SheetEdit::PerceptionProficient(proficient) => {
                sheet.perception_proficient = proficient;
            }
            SheetEdit::SpellPrepared { index, prepared } => match sheet.spells.get_mut(index) {
                Some(spell) => spell.prepared = prepared,
                None => debug!(index, "ignoring prepared flag for unknown spell"),
            },
        }
    }
}
