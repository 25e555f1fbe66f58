mod bitmask;

use crate::action::SheetAction;
use crate::state::CharacterSheet;

pub use bitmask::SheetFields;

/// Minimal description of an executed action's impact on the sheet.
///
/// The presentation layer uses the delta as its change notification: it
/// re-renders the stored parts flagged in `fields`, and re-reads derived
/// values when [`SheetDelta::refreshes_derived`] is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetDelta {
    /// The action that caused this change.
    pub action: SheetAction,

    /// Stored field groups whose values differ between before and after.
    pub fields: SheetFields,
}

impl SheetDelta {
    /// Creates a delta by comparing two sheets field group by field group.
    pub fn from_states(action: SheetAction, before: &CharacterSheet, after: &CharacterSheet) -> Self {
        let mut fields = SheetFields::empty();

        fields.set(SheetFields::INFO, before.info != after.info);
        fields.set(SheetFields::ABILITIES, before.abilities != after.abilities);
        fields.set(SheetFields::HIT_POINTS, before.combat.hp != after.combat.hp);
        fields.set(
            SheetFields::HIT_DICE,
            before.combat.hit_dice != after.combat.hit_dice,
        );
        fields.set(
            SheetFields::DEATH_SAVES,
            before.combat.death_saves != after.combat.death_saves,
        );
        fields.set(
            SheetFields::DEFENSES,
            before.combat.armor_class != after.combat.armor_class
                || before.combat.speed != after.combat.speed,
        );
        fields.set(
            SheetFields::SPELL_SLOTS,
            before.spell_slots != after.spell_slots,
        );
        fields.set(
            SheetFields::SPELLS,
            before.spells != after.spells || before.spellcasting != after.spellcasting,
        );
        fields.set(SheetFields::WILD_SHAPE, before.wild_shape != after.wild_shape);
        fields.set(
            SheetFields::SKILLS,
            before.perception_proficient != after.perception_proficient,
        );
        fields.set(
            SheetFields::GEAR,
            before.weapons != after.weapons
                || before.inventory != after.inventory
                || before.currency != after.currency
                || before.proficiencies != after.proficiencies
                || before.features != after.features,
        );

        Self { action, fields }
    }

    /// True when the action changed nothing.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn changed(&self, fields: SheetFields) -> bool {
        self.fields.intersects(fields)
    }

    /// True when at least one derived value may have a new result.
    pub fn refreshes_derived(&self) -> bool {
        self.fields.intersects(SheetFields::DERIVED_INPUTS)
    }
}
