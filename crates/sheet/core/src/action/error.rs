//! Declined-action errors.
//!
//! Each variant's display text is the notice shown to the user. A declined
//! action never changes the sheet.

use crate::error::{ErrorSeverity, SheetError};
use crate::state::SpellLevel;

/// Errors returned when the sheet declines an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Every slot of the spell's level is used.
    #[error("You are out of Level {level} slots!")]
    OutOfSpellSlots { level: SpellLevel },

    /// Every wild-shape charge is used.
    #[error("Cannot use wild shape!")]
    WildShapeExhausted,

    /// No hit dice left to spend.
    #[error("No hit dice remaining!")]
    NoHitDice,
}

impl SheetError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            OutOfSpellSlots { .. } => "ACTION_OUT_OF_SPELL_SLOTS",
            WildShapeExhausted => "ACTION_WILD_SHAPE_EXHAUSTED",
            NoHitDice => "ACTION_NO_HIT_DICE",
        }
    }
}
