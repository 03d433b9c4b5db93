//! Deterministic battle rules shared by the runtime and the clients.
//!
//! `arena-core` defines the canonical rules (combatants, class abilities,
//! arena environments, the turn engine) and exposes pure APIs with no I/O.
//! A battle is driven exclusively through [`engine::Battle`], which reports
//! every notable change as a [`BattleEvent`] to an [`EventSink`].
pub mod ability;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use ability::{AbilityError, Activation};
pub use config::GameConfig;
pub use engine::{
    ActionError, Battle, BattleAction, BattleError, BattleOutcome, BattlePhase, Side, TurnReport,
};
pub use env::{Arena, Environment, EnvironmentEffect, EnvironmentError};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use event::{BattleEvent, EventSink, NullSink, VecSink};
pub use state::{
    AbilityBadge, AbilityKind, AbilityStatus, ClassKit, CombatClass, Combatant, CombatantBuilder,
    Cooldown, ReflectState, ResurrectionState, Vitals,
};
