use bitflags::bitflags;

bitflags! {
    /// Tracks which stored parts of a [`CharacterSheet`](crate::CharacterSheet)
    /// changed during an action.
    ///
    /// Each bit represents one group of stored fields; derived values are
    /// never tracked because they are recomputed on read.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SheetFields: u16 {
        const INFO        = 1 << 0;
        const ABILITIES   = 1 << 1;
        const HIT_POINTS  = 1 << 2;
        const HIT_DICE    = 1 << 3;
        const DEATH_SAVES = 1 << 4;
        const DEFENSES    = 1 << 5;
        const SPELL_SLOTS = 1 << 6;
        const SPELLS      = 1 << 7;
        const WILD_SHAPE  = 1 << 8;
        const SKILLS      = 1 << 9;
        const GEAR        = 1 << 10;
    }
}

impl SheetFields {
    /// Fields that feed at least one derived value (modifiers, proficiency,
    /// perception, save DC, attack bonuses, wild-shape remaining, hit-dice
    /// maximum, carried weight).
    pub const DERIVED_INPUTS: SheetFields = SheetFields::INFO
        .union(SheetFields::ABILITIES)
        .union(SheetFields::SPELL_SLOTS)
        .union(SheetFields::WILD_SHAPE)
        .union(SheetFields::SKILLS)
        .union(SheetFields::GEAR);
}
