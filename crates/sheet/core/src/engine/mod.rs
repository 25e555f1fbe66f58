//! Action execution.
//!
//! The [`SheetEngine`] is the only writer of a [`CharacterSheet`]. It borrows
//! the sheet for the duration of one or more actions and surfaces declined
//! actions as [`ActionError`]s. Every operation runs to completion before
//! the next one begins.

mod edits;
mod rules;

use crate::action::{ActionError, ActionResult, SheetAction};
use crate::config::SheetConfig;
use crate::state::{CharacterSheet, SheetDelta};

/// Complete outcome of a successful action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Which stored field groups changed.
    pub delta: SheetDelta,

    /// Action-specific result.
    pub result: ActionResult,
}

/// Sheet engine that applies actions to a borrowed sheet.
pub struct SheetEngine<'a> {
    sheet: &'a mut CharacterSheet,
    config: &'a SheetConfig,
}

impl<'a> SheetEngine<'a> {
    pub fn new(sheet: &'a mut CharacterSheet, config: &'a SheetConfig) -> Self {
        Self { sheet, config }
    }

    /// Read access to the sheet being edited.
    pub fn sheet(&self) -> &CharacterSheet {
        &*self.sheet
    }

    /// Executes an action and reports what changed.
    ///
    /// On `Err` the sheet is exactly as it was before the call.
    pub fn execute(&mut self, action: &SheetAction) -> Result<ExecutionOutcome, ActionError> {
        let before = self.sheet.clone();

        let result = match action {
            SheetAction::CastSpell(spell) => self.cast_spell(spell)?,
            SheetAction::WildShape => self.apply_wild_shape()?,
            SheetAction::SpendHitDie { roll } => self.spend_hit_die(*roll)?,
            SheetAction::ShortRest => self.short_rest(),
            SheetAction::LongRest => self.long_rest(),
            SheetAction::Edit(edit) => {
                self.apply_edit(edit);
                ActionResult::Edited
            }
        };

        let delta = SheetDelta::from_states(action.clone(), &before, &*self.sheet);
        tracing::debug!(
            action = action.as_str(),
            fields = ?delta.fields,
            "action applied"
        );

        Ok(ExecutionOutcome { delta, result })
    }
}
