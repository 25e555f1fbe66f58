//! Common error infrastructure for sheet-core.
//!
//! This module provides the severity classification and the shared trait
//! implemented by every error in the crate. Concrete errors live next to the
//! code that raises them: [`crate::action::ActionError`] for declined actions
//! and [`crate::state::InitializationError`] for rejected character seeds.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action was declined; the sheet is unchanged and the
///   user may act again once the resource is restored
/// - **Validation**: invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Declined action, e.g. no spell slots left.
    Recoverable,

    /// Invalid input, e.g. a seed whose pools are overdrawn.
    Validation,
}

impl ErrorSeverity {
    /// True when acting again later may succeed.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all sheet-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl; the display
///   text is the notice shown to the user
/// - Classify severity based on recoverability, not impact
pub trait SheetError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
