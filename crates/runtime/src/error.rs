//! Unified error type surfaced by the runtime API.
use thiserror::Error;

use arena_core::{ActionError, BattleError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("character {index} is not on the roster ({available} available)")]
    UnknownCharacter { index: usize, available: usize },

    #[error("arena {index} does not exist ({available} available)")]
    UnknownArena { index: usize, available: usize },

    #[error("character {index} cannot fight itself")]
    SameCharacter { index: usize },

    #[error("failed to start battle")]
    Battle(#[from] BattleError),

    #[error("battle refused an action")]
    Action(#[from] ActionError),

    #[error("battle loop stopped before a winner was decided")]
    BattleUnfinished,

    #[error("frontend I/O failed")]
    Frontend(#[source] std::io::Error),

    #[error("failed to load content: {0}")]
    Content(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Selection errors are the player's to fix; the menu simply asks again.
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            RuntimeError::UnknownCharacter { .. }
                | RuntimeError::UnknownArena { .. }
                | RuntimeError::SameCharacter { .. }
        )
    }
}
