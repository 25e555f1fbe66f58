//! Character sheet rules and state for a tabletop role-playing game.
//!
//! `sheet-core` owns one adventurer's stored values (scores, level, hit
//! points, slot and charge pools) and exposes every dependent value as a
//! pure accessor recomputed on read. All state mutation flows through
//! [`engine::SheetEngine`]; a presentation layer reads the
//! [`CharacterSheet`] or a [`SheetSnapshot`] and forwards [`SheetAction`]s.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod state;
pub mod stats;

pub use action::{ActionError, ActionResult, SheetAction, SheetEdit};
pub use config::SheetConfig;
pub use engine::{ExecutionOutcome, SheetEngine};
pub use error::{ErrorSeverity, SheetError};
pub use snapshot::SheetSnapshot;
pub use state::{
    CharacterInfo, CharacterSheet, CombatState, Currency, Feature, InitializationError,
    InventoryItem, Proficiencies, SheetDelta, SheetFields, Spell, SpellLevel, SpellSlots,
    SpellcastingState, Weapon,
};
pub use stats::{
    Ability, AbilityScores, DeathSaves, HitDice, HitDie, HitPoints, Modifiers, ResourcePool,
};
