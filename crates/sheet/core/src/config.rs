/// Sheet configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Lowest value an ability score edit is clamped to.
    pub ability_score_min: i32,

    /// Highest value an ability score edit is clamped to.
    pub ability_score_max: i32,

    /// Highest character level an edit may set.
    /// Never exceeds [`SheetConfig::MAX_LEVEL`].
    pub max_level: u32,
}

impl SheetConfig {
    // ===== rules constants =====
    /// Number of tracked spell-slot levels (cantrips through 3rd level).
    pub const SLOT_LEVELS: usize = 4;
    /// Successes or failures needed to end death saving throws.
    pub const DEATH_SAVE_MAX: u8 = 3;
    /// Spell save DC = SAVE_DC_BASE + proficiency + casting modifier.
    pub const SAVE_DC_BASE: i32 = 8;
    /// Passive checks = PASSIVE_BASE + skill bonus.
    pub const PASSIVE_BASE: i32 = 10;
    /// Hard cap on character level.
    pub const MAX_LEVEL: u32 = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ABILITY_SCORE_MIN: i32 = 1;
    pub const DEFAULT_ABILITY_SCORE_MAX: i32 = 30;

    pub fn new() -> Self {
        Self {
            ability_score_min: Self::DEFAULT_ABILITY_SCORE_MIN,
            ability_score_max: Self::DEFAULT_ABILITY_SCORE_MAX,
            max_level: Self::MAX_LEVEL,
        }
    }

    pub fn with_ability_bounds(min: i32, max: i32) -> Self {
        Self {
            ability_score_min: min.min(max),
            ability_score_max: max.max(min),
            ..Self::new()
        }
    }

    /// Ability bounds as `(low, high)`, ordered even if the fields are swapped.
    pub fn ability_bounds(&self) -> (i32, i32) {
        (
            self.ability_score_min.min(self.ability_score_max),
            self.ability_score_max.max(self.ability_score_min),
        )
    }

    /// Clamp an ability score into the configured range.
    pub fn clamp_ability(&self, score: i32) -> i32 {
        let (low, high) = self.ability_bounds();
        score.clamp(low, high)
    }

    /// Clamp a level into `1..=max_level`.
    pub fn clamp_level(&self, level: u32) -> u32 {
        level.clamp(1, self.level_cap())
    }

    /// Effective level cap, never above the rules cap and never below 1.
    pub fn level_cap(&self) -> u32 {
        self.max_level.clamp(1, Self::MAX_LEVEL)
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}
