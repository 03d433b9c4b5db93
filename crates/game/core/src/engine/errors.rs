//! Error types for battle setup and action submission.

use crate::ability::AbilityError;
use crate::env::EnvironmentError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};

/// Errors raised while starting a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error("{name} cannot enter a battle with no health left")]
    CombatantDefeated { name: String },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Environment(err) => err.severity(),
            Self::CombatantDefeated { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Environment(err) => err.error_code(),
            Self::CombatantDefeated { .. } => "BATTLE_COMBATANT_DEFEATED",
        }
    }
}

/// Errors raised for a rejected action. The battle state is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("special ability unavailable: {source}")]
    Ability {
        source: AbilityError,
        context: ErrorContext,
    },

    #[error("the battle is already over")]
    BattleOver { context: ErrorContext },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Ability { source, .. } => source.severity(),
            Self::BattleOver { .. } => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Ability { context, .. } | Self::BattleOver { context } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Ability { source, .. } => source.error_code(),
            Self::BattleOver { .. } => "ACTION_BATTLE_OVER",
        }
    }
}
