//! Spellcasting state: known spells and per-level slot pools.

use crate::config::SheetConfig;
use crate::stats::{Ability, ResourcePool};

/// Spell level tracked by the sheet. Level 0 spells are cantrips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum SpellLevel {
    #[default]
    Cantrip,
    First,
    Second,
    Third,
}

impl SpellLevel {
    pub const ALL: [SpellLevel; SheetConfig::SLOT_LEVELS] = [
        SpellLevel::Cantrip,
        SpellLevel::First,
        SpellLevel::Second,
        SpellLevel::Third,
    ];

    /// Numeric level, also the index of the slot pool.
    pub const fn index(&self) -> usize {
        match self {
            SpellLevel::Cantrip => 0,
            SpellLevel::First => 1,
            SpellLevel::Second => 2,
            SpellLevel::Third => 3,
        }
    }

    pub const fn is_cantrip(&self) -> bool {
        matches!(self, SpellLevel::Cantrip)
    }
}

impl core::fmt::Display for SpellLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A numeric level with no tracked slot pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("spell level {0} is not tracked (expected 0-3)")]
pub struct UnknownSpellLevel(pub u8);

impl TryFrom<u8> for SpellLevel {
    type Error = UnknownSpellLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SpellLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or(UnknownSpellLevel(value))
    }
}

impl From<SpellLevel> for u8 {
    fn from(level: SpellLevel) -> Self {
        level.index() as u8
    }
}

/// A known spell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub name: String,
    pub level: SpellLevel,
    pub prepared: bool,
    pub range: String,
    pub casting_time: String,
    pub description: String,
}

impl Spell {
    pub fn new(name: impl Into<String>, level: SpellLevel) -> Self {
        Self {
            name: name.into(),
            level,
            prepared: false,
            range: String::new(),
            casting_time: String::new(),
            description: String::new(),
        }
    }

    pub fn prepared(mut self) -> Self {
        self.prepared = true;
        self
    }

    pub fn with_details(
        mut self,
        range: impl Into<String>,
        casting_time: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.range = range.into();
        self.casting_time = casting_time.into();
        self.description = description.into();
        self
    }

    pub const fn is_cantrip(&self) -> bool {
        self.level.is_cantrip()
    }
}

/// One slot pool per spell level. The cantrip pool exists but is never
/// drawn from.
///
/// Serialized as a list indexed by spell level; missing trailing levels are
/// empty pools.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<ResourcePool>", into = "Vec<ResourcePool>")
)]
pub struct SpellSlots(pub [ResourcePool; SheetConfig::SLOT_LEVELS]);

/// More slot pools than tracked spell levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0} spell slot levels given, at most {max} are tracked", max = SheetConfig::SLOT_LEVELS)]
pub struct TooManySlotLevels(pub usize);

impl TryFrom<Vec<ResourcePool>> for SpellSlots {
    type Error = TooManySlotLevels;

    fn try_from(pools: Vec<ResourcePool>) -> Result<Self, Self::Error> {
        if pools.len() > SheetConfig::SLOT_LEVELS {
            return Err(TooManySlotLevels(pools.len()));
        }
        let mut slots = SpellSlots::default();
        for (slot, pool) in slots.0.iter_mut().zip(pools) {
            *slot = pool;
        }
        Ok(slots)
    }
}

impl From<SpellSlots> for Vec<ResourcePool> {
    fn from(slots: SpellSlots) -> Self {
        slots.0.to_vec()
    }
}

impl SpellSlots {
    /// Build pools from the maximum slots of levels 1 through 3.
    pub const fn with_maximums(first: u32, second: u32, third: u32) -> Self {
        Self([
            ResourcePool::full(0),
            ResourcePool::full(first),
            ResourcePool::full(second),
            ResourcePool::full(third),
        ])
    }

    pub const fn pool(&self, level: SpellLevel) -> &ResourcePool {
        &self.0[level.index()]
    }

    pub fn pool_mut(&mut self, level: SpellLevel) -> &mut ResourcePool {
        &mut self.0[level.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpellLevel, &ResourcePool)> {
        SpellLevel::ALL.into_iter().zip(self.0.iter())
    }

    pub fn restore_all(&mut self) {
        self.0.iter_mut().for_each(ResourcePool::restore);
    }

    /// Remaining slots per level, indexed by numeric level.
    pub fn remaining(&self) -> [u32; SheetConfig::SLOT_LEVELS] {
        self.0.map(|pool| pool.remaining())
    }
}

/// Which ability drives spellcasting. Save DC and attack bonus are derived
/// on the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellcastingState {
    pub ability: Ability,
}

impl Default for SpellcastingState {
    fn default() -> Self {
        Self {
            ability: Ability::Wisdom,
        }
    }
}
