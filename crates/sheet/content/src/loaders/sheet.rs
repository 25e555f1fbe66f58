//! Character seed loader.
//!
//! Loads a [`CharacterSheet`] from a RON document and checks it against the
//! sheet invariants before handing it out.

use std::path::Path;

use sheet_core::{CharacterSheet, SheetConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for character seeds from RON files.
pub struct SheetLoader;

impl SheetLoader {
    /// Load and validate a character seed from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing one `CharacterSheet`
    /// * `config` - Bounds the seed is validated against
    pub fn load(path: &Path, config: &SheetConfig) -> LoadResult<CharacterSheet> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("Invalid character seed {}: {}", path.display(), e))
    }

    /// Parse and validate a character seed from RON text.
    pub fn parse(content: &str, config: &SheetConfig) -> LoadResult<CharacterSheet> {
        let sheet: CharacterSheet = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character RON: {}", e))?;

        sheet.validate(config)?;

        tracing::debug!(
            name = %sheet.info.name,
            class = %sheet.info.class,
            level = sheet.info.level,
            "character seed loaded"
        );
        Ok(sheet)
    }
}
