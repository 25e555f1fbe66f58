//! Characters compiled into the crate.

use sheet_core::{CharacterSheet, SheetConfig};

use crate::loaders::{LoadResult, SheetLoader};

const ZORYA_YAROSLAVA: &str = include_str!("../data/characters/zorya.ron");

/// Zorya Yaroslava, a third-level druid. Validated against `config`.
pub fn zorya_yaroslava(config: &SheetConfig) -> LoadResult<CharacterSheet> {
    SheetLoader::parse(ZORYA_YAROSLAVA, config)
}
