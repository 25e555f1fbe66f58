//! Actions the presentation layer forwards into the sheet.
//!
//! Two families exist:
//! - **Rules actions**: casting, wild shape, hit dice and rests. These may be
//!   declined with an [`ActionError`].
//! - **Edits** ([`SheetEdit`]): direct input changes from form fields. Edits
//!   are bounds-clamped and never fail.

mod error;

pub use error::ActionError;

use crate::state::{Spell, SpellLevel};
use crate::stats::Ability;

/// Every intent that can mutate a [`crate::CharacterSheet`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetAction {
    /// Cast a spell, consuming a slot of its level unless it is a cantrip.
    CastSpell(Spell),
    /// Use one wild-shape charge.
    WildShape,
    /// Spend one hit die and heal by `roll` (die result + CON, rolled by the player).
    SpendHitDie { roll: u32 },
    ShortRest,
    LongRest,
    Edit(SheetEdit),
}

impl SheetAction {
    /// Returns a static name for this action, used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SheetAction::CastSpell(_) => "cast_spell",
            SheetAction::WildShape => "wild_shape",
            SheetAction::SpendHitDie { .. } => "spend_hit_die",
            SheetAction::ShortRest => "short_rest",
            SheetAction::LongRest => "long_rest",
            SheetAction::Edit(_) => "edit",
        }
    }
}

/// Input changes bound to form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetEdit {
    AbilityScore { ability: Ability, score: i32 },
    Level(u32),
    CurrentHp(u32),
    MaxHp(u32),
    TempHp(u32),
    ArmorClass(i32),
    Speed(u32),
    DeathSaves { successes: u8, failures: u8 },
    SlotMax { level: SpellLevel, max: u32 },
    WildShapeMax(u32),
    PerceptionProficient(bool),
    SpellPrepared { index: usize, prepared: bool },
}

/// What a successful action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// A cantrip was cast; no slot was used.
    CantripCast,
    /// A slot was consumed.
    SlotUsed { level: SpellLevel, remaining: u32 },
    /// A wild-shape charge was consumed.
    WildShaped { remaining: u32 },
    /// A hit die was spent.
    HitDieSpent { healed: u32, dice_remaining: u32 },
    ShortRested,
    LongRested {
        hp_restored: u32,
        hit_dice_recovered: u32,
    },
    /// An edit was applied (possibly clamped).
    Edited,
}
