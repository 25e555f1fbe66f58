//! Derived values - pure functions of stored sheet state.
//!
//! These are NOT stored - always recomputed from scores, level and flags
//! when read.
//!
//! - Skill bonus: modifier + (proficiency if proficient)
//! - Passive score: 10 + skill bonus
//! - Spell save DC: 8 + proficiency + casting modifier
//! - Spell attack bonus: proficiency + casting modifier

use crate::config::SheetConfig;

/// Bonus for a skill or attack roll.
pub const fn skill_bonus(modifier: i32, proficiency: i32, proficient: bool) -> i32 {
    if proficient {
        modifier + proficiency
    } else {
        modifier
    }
}

/// Passive check score for a skill bonus (e.g. passive perception).
pub const fn passive_score(bonus: i32) -> i32 {
    SheetConfig::PASSIVE_BASE + bonus
}

pub const fn spell_save_dc(proficiency: i32, casting_modifier: i32) -> i32 {
    SheetConfig::SAVE_DC_BASE + proficiency + casting_modifier
}

pub const fn spell_attack_bonus(proficiency: i32, casting_modifier: i32) -> i32 {
    proficiency + casting_modifier
}
