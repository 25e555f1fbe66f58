//! Stat system.
//!
//! ```text
//! [ Ability Scores ]  (stored)
//!      ↓
//! [ Modifiers / Proficiency ]  (derived)
//!      ↓
//! [ Skill, Save DC, Attack bonuses ]  (derived)
//!
//! [ Resources ]  (stored counters, derived remaining)
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: scores, level and resource counters only
//! 2. **Derived on read**: modifiers, proficiency and every bonus are pure
//!    functions, never cached on the sheet
//! 3. **Bounded pools**: `used <= max` and `current <= max` hold after every
//!    mutation

pub mod abilities;
pub mod derived;
pub mod resources;

pub use abilities::{Ability, AbilityScores, Modifiers, ability_modifier, proficiency_bonus};
pub use derived::{passive_score, skill_bonus, spell_attack_bonus, spell_save_dc};
pub use resources::{DeathSaves, HitDice, HitDie, HitPoints, ResourcePool};
