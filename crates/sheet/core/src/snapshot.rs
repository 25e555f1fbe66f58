//! SheetSnapshot - every derived value captured at one moment.
//!
//! The presentation layer renders from a snapshot instead of calling each
//! accessor separately. A snapshot is immutable; capture a new one after an
//! action whose delta refreshes derived values.

use crate::config::SheetConfig;
use crate::state::CharacterSheet;
use crate::stats::Modifiers;

/// Derived values of a [`CharacterSheet`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSnapshot {
    pub modifiers: Modifiers,
    pub proficiency_bonus: i32,
    pub perception: i32,
    pub passive_perception: i32,
    pub initiative: i32,
    pub spell_save_dc: i32,
    pub spell_attack_bonus: i32,
    pub wild_shape_remaining: u32,
    pub hit_dice_max: u32,
    /// Remaining slots indexed by spell level (0 = cantrips).
    pub slots_remaining: [u32; SheetConfig::SLOT_LEVELS],
    pub carried_weight: u32,
    /// Total coin value in copper pieces.
    pub wealth_copper: u64,
}

impl SheetSnapshot {
    pub fn capture(sheet: &CharacterSheet) -> Self {
        Self {
            modifiers: sheet.modifiers(),
            proficiency_bonus: sheet.proficiency_bonus(),
            perception: sheet.perception(),
            passive_perception: sheet.passive_perception(),
            initiative: sheet.initiative(),
            spell_save_dc: sheet.spell_save_dc(),
            spell_attack_bonus: sheet.spell_attack_bonus(),
            wild_shape_remaining: sheet.wild_shape_remaining(),
            hit_dice_max: sheet.hit_dice_max(),
            slots_remaining: sheet.spell_slots.remaining(),
            carried_weight: sheet.carried_weight(),
            wealth_copper: sheet.currency.total_copper(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SheetAction;
    use crate::engine::SheetEngine;
    use crate::state::fixtures::druid;

    #[test]
    fn snapshot_of_third_level_druid() {
        let snapshot = SheetSnapshot::capture(&druid());

        assert_eq!(snapshot.proficiency_bonus, 2);
        assert_eq!(snapshot.modifiers.wis, 3);
        assert_eq!(snapshot.spell_save_dc, 13);
        assert_eq!(snapshot.spell_attack_bonus, 5);
        assert_eq!(snapshot.passive_perception, 15);
        assert_eq!(snapshot.initiative, 2);
        assert_eq!(snapshot.slots_remaining, [0, 4, 2, 0]);
        assert_eq!(snapshot.wild_shape_remaining, 2);
        assert_eq!(snapshot.hit_dice_max, 3);
        assert_eq!(snapshot.carried_weight, 17);
        assert_eq!(snapshot.wealth_copper, 1600);
    }

    #[test]
    fn snapshot_is_not_affected_by_later_actions() {
        let mut sheet = druid();
        let config = SheetConfig::default();
        let snapshot = SheetSnapshot::capture(&sheet);

        SheetEngine::new(&mut sheet, &config)
            .execute(&SheetAction::WildShape)
            .expect("a charge is available");

        assert_eq!(snapshot.wild_shape_remaining, 2);
        assert_eq!(SheetSnapshot::capture(&sheet).wild_shape_remaining, 1);
    }
}
