//! Character-load errors.
//!
//! A seed that breaks a sheet invariant is rejected before any operation
//! runs against it.

use crate::error::{ErrorSeverity, SheetError};
use crate::state::SpellLevel;
use crate::stats::Ability;

/// Errors raised while validating a freshly loaded [`crate::CharacterSheet`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// Level outside `1..=max`.
    #[error("Level {level} is out of range (1-{max})")]
    LevelOutOfRange { level: u32, max: u32 },

    /// Ability score outside the configured bounds.
    #[error("{ability} score {score} is out of range ({min}-{max})")]
    AbilityOutOfRange {
        ability: Ability,
        score: i32,
        min: i32,
        max: i32,
    },

    /// Maximum HP of zero; edits never go below 1.
    #[error("Maximum HP must be at least 1")]
    MaxHitPointsZero,

    /// Current HP above maximum.
    #[error("Current HP {current} exceeds maximum {max}")]
    HitPointsExceedMax { current: u32, max: u32 },

    /// More hit dice remaining than the character level allows.
    #[error("{remaining} hit dice remaining exceeds level {level}")]
    HitDiceExceedLevel { remaining: u32, level: u32 },

    /// A spell-slot pool with `used > max`.
    #[error("Level {level} spell slots overdrawn (used: {used}, max: {max})")]
    SpellSlotsOverdrawn {
        level: SpellLevel,
        used: u32,
        max: u32,
    },

    /// Wild-shape pool with `used > max`.
    #[error("Wild shape overdrawn (used: {used}, max: {max})")]
    WildShapeOverdrawn { used: u32, max: u32 },

    /// Death-save counter above 3.
    #[error("Death saves out of range (successes: {successes}, failures: {failures})")]
    DeathSavesOutOfRange { successes: u8, failures: u8 },
}

impl SheetError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            LevelOutOfRange { .. } => "INIT_LEVEL_OUT_OF_RANGE",
            AbilityOutOfRange { .. } => "INIT_ABILITY_OUT_OF_RANGE",
            MaxHitPointsZero => "INIT_MAX_HP_ZERO",
            HitPointsExceedMax { .. } => "INIT_HP_EXCEEDS_MAX",
            HitDiceExceedLevel { .. } => "INIT_HIT_DICE_EXCEED_LEVEL",
            SpellSlotsOverdrawn { .. } => "INIT_SPELL_SLOTS_OVERDRAWN",
            WildShapeOverdrawn { .. } => "INIT_WILD_SHAPE_OVERDRAWN",
            DeathSavesOutOfRange { .. } => "INIT_DEATH_SAVES_OUT_OF_RANGE",
        }
    }
}
