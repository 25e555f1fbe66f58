//! Ability scores - the stored inputs of the stat system.
//!
//! Scores are the Single Source of Truth. Modifiers are derived one-to-one
//! from them and are NEVER stored.
//!
//! Modifier = floor((Score - 10) / 2)

/// The six abilities.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Ability {
    #[strum(to_string = "Strength", serialize = "str")]
    Strength,
    #[strum(to_string = "Dexterity", serialize = "dex")]
    Dexterity,
    #[strum(to_string = "Constitution", serialize = "con")]
    Constitution,
    #[strum(to_string = "Intelligence", serialize = "int")]
    Intelligence,
    #[strum(to_string = "Wisdom", serialize = "wis")]
    Wisdom,
    #[strum(to_string = "Charisma", serialize = "cha")]
    Charisma,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];
}

/// Modifier for a single score: floor((score - 10) / 2).
///
/// `div_euclid` rounds toward negative infinity for a positive divisor,
/// so a score of 9 yields -1 rather than 0.
pub const fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Proficiency bonus for a level: floor((level - 1) / 4) + 2.
///
/// Levels below 1 are treated as level 1.
pub const fn proficiency_bonus(level: u32) -> i32 {
    let level = if level == 0 { 1 } else { level };
    ((level - 1) / 4) as i32 + 2
}

/// The six stored ability scores.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    pub const fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub const fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = score;
    }

    /// Modifier of one ability, derived on read.
    pub const fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }

    /// Iterate `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(|ability| (ability, self.get(ability)))
    }
}

impl Default for AbilityScores {
    /// All 10s (modifier +0).
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

/// All six modifiers, computed from [`AbilityScores`].
///
/// NOT stored - build one with [`Modifiers::compute`] whenever needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub int: i32,
    pub wis: i32,
    pub cha: i32,
}

impl Modifiers {
    pub const fn compute(scores: &AbilityScores) -> Self {
        Self {
            str: ability_modifier(scores.strength),
            dex: ability_modifier(scores.dexterity),
            con: ability_modifier(scores.constitution),
            int: ability_modifier(scores.intelligence),
            wis: ability_modifier(scores.wisdom),
            cha: ability_modifier(scores.charisma),
        }
    }

    pub const fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.str,
            Ability::Dexterity => self.dex,
            Ability::Constitution => self.con,
            Ability::Intelligence => self.int,
            Ability::Wisdom => self.wis,
            Ability::Charisma => self.cha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn modifier_floors_for_every_score() {
        for score in -5..=40 {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            assert_eq!(ability_modifier(score), expected, "score {score}");
        }
    }

    #[test]
    fn odd_scores_below_ten_round_down() {
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(1), -5);
    }

    #[test]
    fn proficiency_scales_every_four_levels() {
        for level in 1..=20u32 {
            let expected = ((level as i32 - 1) / 4) + 2;
            assert_eq!(proficiency_bonus(level), expected, "level {level}");
        }
        assert_eq!(proficiency_bonus(3), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(17), 6);
    }

    #[test]
    fn level_zero_is_treated_as_one() {
        assert_eq!(proficiency_bonus(0), 2);
    }

    #[test]
    fn modifiers_follow_scores() {
        let mut scores = AbilityScores::new(10, 14, 12, 10, 16, 8);
        let mods = Modifiers::compute(&scores);
        assert_eq!(mods.wis, 3);
        assert_eq!(mods.cha, -1);
        assert_eq!(mods.dex, 2);

        scores.set(Ability::Wisdom, 18);
        assert_eq!(Modifiers::compute(&scores).wis, 4);
        assert_eq!(scores.modifier(Ability::Wisdom), 4);
    }

    #[test]
    fn ability_parses_short_and_long_names() {
        assert_eq!("wis".parse::<Ability>(), Ok(Ability::Wisdom));
        assert_eq!("DEX".parse::<Ability>(), Ok(Ability::Dexterity));
        assert_eq!("strength".parse::<Ability>(), Ok(Ability::Strength));
        assert!("luck".parse::<Ability>().is_err());
        assert_eq!(Ability::Charisma.to_string(), "Charisma");
    }

    #[test]
    fn iteration_order_matches_sheet_order() {
        let from_strum: Vec<_> = Ability::iter().collect();
        assert_eq!(from_strum, Ability::ALL.to_vec());

        let scores = AbilityScores::new(1, 2, 3, 4, 5, 6);
        let values: Vec<_> = scores.iter().map(|(_, score)| score).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }
}
