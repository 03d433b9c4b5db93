//! Environment application errors.

use crate::env::Environment;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvironmentError {
    /// The combatant already carries another arena's modifiers.
    #[error("{combatant} was already conditioned by the {previous} environment")]
    AlreadyConditioned {
        combatant: String,
        previous: Environment,
    },
}

impl GameError for EnvironmentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyConditioned { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyConditioned { .. } => "ENVIRONMENT_ALREADY_CONDITIONED",
        }
    }
}
