//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (`ActionError`, `BattleError`, `EnvironmentError`) live
//! next to the operations they validate. This module provides the shared
//! classification used by every one of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error enum with specific variants
//! - **Rich Context**: Errors carry the turn and side they were raised on
//! - **Severity Classification**: Errors are categorized for recovery strategies

use crate::engine::Side;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller can pick another option and continue
/// - **Validation**: Invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - re-prompt and retry with a different choice.
    ///
    /// Examples: special ability still cooling down
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: combatant already conditioned by an arena, battle already over
    Validation,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Side whose action triggered the error (if applicable).
    pub side: Option<Side>,

    /// Turn counter at the time of error.
    pub turn: u32,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(turn: u32) -> Self {
        Self { side: None, turn }
    }

    /// Attaches a side to this context (builder pattern).
    #[must_use]
    pub const fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }
}

/// Common trait for all arena-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
