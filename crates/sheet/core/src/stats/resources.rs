//! Resources - consumable pools restored by rests.
//!
//! Resource pools are partially stored:
//! - Maximum and used/current values: sheet state (MUST be stored)
//! - Remaining values: computed on read (NOT stored)
//!
//! Every pool keeps `used <= max` and `current <= max`. Mutators clamp rather
//! than overflow, so a pool can never leave its bounds.

/// A `{max, used}` counter pair: spell slots of one level, wild-shape charges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    pub max: u32,
    pub used: u32,
}

impl ResourcePool {
    /// Create a pool, clamping `used` to `max`.
    pub const fn new(max: u32, used: u32) -> Self {
        let used = if used > max { max } else { used };
        Self { max, used }
    }

    /// Create an untouched pool.
    pub const fn full(max: u32) -> Self {
        Self { max, used: 0 }
    }

    pub const fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.used)
    }

    pub const fn is_exhausted(&self) -> bool {
        self.used >= self.max
    }

    /// Consume one charge. Returns false (and changes nothing) when exhausted.
    pub fn try_spend(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.used += 1;
        true
    }

    /// Mark every charge as available again.
    pub fn restore(&mut self) {
        self.used = 0;
    }

    /// Change the maximum, pulling `used` down if it would exceed it.
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.used = self.used.min(max);
    }
}

/// Current, maximum and temporary hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    pub current: u32,
    pub max: u32,
    pub temp: u32,
}

impl HitPoints {
    /// Create hit points, clamping `current` to `max`.
    pub const fn new(current: u32, max: u32, temp: u32) -> Self {
        let current = if current > max { max } else { current };
        Self { current, max, temp }
    }

    /// Full health with no temporary hit points.
    pub const fn at_max(max: u32) -> Self {
        Self {
            current: max,
            max,
            temp: 0,
        }
    }

    /// Add `amount` to current HP without exceeding the maximum.
    ///
    /// Returns the number of hit points actually regained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current.saturating_sub(before)
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }

    pub fn set_current(&mut self, current: u32) {
        self.current = current.min(self.max);
    }

    /// Change the maximum (at least 1), pulling current HP down if needed.
    pub fn set_max(&mut self, max: u32) {
        self.max = max.max(1);
        self.current = self.current.min(self.max);
    }

    pub const fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl Default for HitPoints {
    fn default() -> Self {
        Self::at_max(1)
    }
}

/// Hit die size, determined by class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HitDie {
    D6,
    #[default]
    D8,
    D10,
    D12,
}

impl HitDie {
    /// Number of faces on the die.
    pub const fn faces(&self) -> u32 {
        match self {
            HitDie::D6 => 6,
            HitDie::D8 => 8,
            HitDie::D10 => 10,
            HitDie::D12 => 12,
        }
    }
}

/// Hit-dice pool. Only `remaining` is stored; the maximum equals the
/// character level and is passed in by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitDice {
    pub die: HitDie,
    pub remaining: u32,
}

impl HitDice {
    pub const fn new(die: HitDie, remaining: u32) -> Self {
        Self { die, remaining }
    }

    /// Spend one die. Returns false (and changes nothing) when none remain.
    pub fn try_spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Regain `max(1, floor(level / 2))` dice, capped at `level`.
    ///
    /// Returns the number of dice actually regained.
    pub fn recover_half(&mut self, level: u32) -> u32 {
        let before = self.remaining;
        let amount = (level / 2).max(1);
        self.remaining = self.remaining.saturating_add(amount).min(level);
        self.remaining.saturating_sub(before)
    }

    /// Pull `remaining` down to a (new) level cap.
    pub fn clamp_to_level(&mut self, level: u32) {
        self.remaining = self.remaining.min(level);
    }
}

impl Default for HitDice {
    fn default() -> Self {
        Self::new(HitDie::default(), 1)
    }
}

/// Death saving throw counters, each in `0..=3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathSaves {
    pub successes: u8,
    pub failures: u8,
}

impl DeathSaves {
    pub const MAX: u8 = crate::config::SheetConfig::DEATH_SAVE_MAX;

    /// Create counters, clamping each to [`DeathSaves::MAX`].
    pub fn new(successes: u8, failures: u8) -> Self {
        Self {
            successes: successes.min(Self::MAX),
            failures: failures.min(Self::MAX),
        }
    }

    pub const fn is_stable(&self) -> bool {
        self.successes >= Self::MAX
    }

    pub const fn is_dead(&self) -> bool {
        self.failures >= Self::MAX
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_spend_stops_at_max() {
        let mut pool = ResourcePool::full(2);
        assert!(pool.try_spend());
        assert!(pool.try_spend());
        assert!(!pool.try_spend());
        assert_eq!(pool.used, 2);
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn empty_pool_is_exhausted() {
        let mut pool = ResourcePool::full(0);
        assert!(pool.is_exhausted());
        assert!(!pool.try_spend());
        assert_eq!(pool, ResourcePool::full(0));
    }

    #[test]
    fn pool_constructor_and_set_max_clamp_used() {
        assert_eq!(ResourcePool::new(2, 5).used, 2);

        let mut pool = ResourcePool::new(4, 3);
        pool.set_max(1);
        assert_eq!(pool, ResourcePool::new(1, 1));
    }

    #[test]
    fn heal_is_clamped_to_max() {
        let mut hp = HitPoints::new(10, 24, 0);
        assert_eq!(hp.heal(20), 14);
        assert_eq!(hp.current, 24);
        assert!(hp.is_full());
        assert_eq!(hp.heal(u32::MAX), 0);
    }

    #[test]
    fn heal_on_overfull_hit_points_reports_nothing_regained() {
        let mut hp = HitPoints {
            current: 30,
            max: 24,
            temp: 0,
        };
        assert_eq!(hp.heal(5), 0);
        assert_eq!(hp.current, 24);
    }

    #[test]
    fn lowering_max_hp_pulls_current_down() {
        let mut hp = HitPoints::at_max(24);
        hp.set_max(12);
        assert_eq!(hp.current, 12);
        hp.set_max(0);
        assert_eq!(hp.max, 1);
        assert_eq!(hp.current, 1);
    }

    #[test]
    fn hit_dice_recover_half_level_capped_at_level() {
        let mut dice = HitDice::new(HitDie::D8, 0);
        assert_eq!(dice.recover_half(3), 1);
        assert_eq!(dice.remaining, 1);

        let mut dice = HitDice::new(HitDie::D8, 1);
        assert_eq!(dice.recover_half(8), 4);
        assert_eq!(dice.remaining, 5);

        let mut dice = HitDice::new(HitDie::D8, 7);
        assert_eq!(dice.recover_half(8), 1);
        assert_eq!(dice.remaining, 8);

        let mut dice = HitDice::new(HitDie::D8, 1);
        assert_eq!(dice.recover_half(1), 0);
        assert_eq!(dice.remaining, 1);
    }

    #[test]
    fn hit_dice_spend_until_empty() {
        let mut dice = HitDice::new(HitDie::D10, 1);
        assert!(dice.try_spend());
        assert!(!dice.try_spend());
        assert_eq!(dice.remaining, 0);
    }

    #[test]
    fn hit_die_parses_and_displays() {
        assert_eq!("d8".parse::<HitDie>(), Ok(HitDie::D8));
        assert_eq!("D12".parse::<HitDie>(), Ok(HitDie::D12));
        assert_eq!(HitDie::D6.to_string(), "d6");
        assert_eq!(HitDie::D10.faces(), 10);
    }

    #[test]
    fn death_saves_clamp_to_three() {
        let saves = DeathSaves::new(5, 3);
        assert_eq!(saves.successes, 3);
        assert!(saves.is_stable());
        assert!(saves.is_dead());
    }
}
