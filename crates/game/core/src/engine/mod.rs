//! Turn engine for a two-combatant battle.
//!
//! [`Battle`] owns both combatants for the length of one fight. It conditions
//! them with the arena environment once, then alternates turns:
//!
//! ```text
//! AwaitingAction(side) → Resolving → CheckDefeat → Swap → AwaitingAction(other)
//!                                        └──────────→ Over
//! ```
//!
//! Callers drive it by submitting one [`BattleAction`] per turn. A rejected
//! action leaves the battle exactly as it was, so the caller can simply
//! prompt again.

mod errors;
mod turns;

pub use errors::{ActionError, BattleError};

use crate::config::GameConfig;
use crate::env::{self, Arena, EnvironmentError};
use crate::error::ErrorContext;
use crate::event::{BattleEvent, EventSink, NullSink};
use crate::state::Combatant;

/// One of the two battle participants.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::PlayerOne, Side::PlayerTwo];

    pub const fn opponent(self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::PlayerOne => 0,
            Side::PlayerTwo => 1,
        }
    }
}

/// Choice made by the acting combatant.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleAction {
    Attack,
    Ability,
}

/// Position of the battle in its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    AwaitingAction(Side),
    Resolving,
    CheckDefeat,
    Swap,
    Over,
}

/// Final result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub winner: Side,
    pub loser: Side,
    /// Turn on which the battle ended.
    pub turns: u32,
}

/// Everything that happened while resolving one submitted action.
///
/// `events` also includes the upkeep of the following turn (cooldown tick,
/// expired effects) when the battle continues.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub turn: u32,
    pub actor: Side,
    pub action: BattleAction,
    pub events: Vec<BattleEvent>,
    pub outcome: Option<BattleOutcome>,
}

/// A battle session between two combatants in one arena.
pub struct Battle<S: EventSink = NullSink> {
    config: GameConfig,
    arena: Arena,
    combatants: [Combatant; 2],
    attacker: Side,
    turn: u32,
    phase: BattlePhase,
    outcome: Option<BattleOutcome>,
    opening: Vec<BattleEvent>,
    sink: S,
}

impl<S: EventSink> Battle<S> {
    /// Starts a battle: conditions both combatants with the arena environment
    /// and prepares turn 1 for player one.
    ///
    /// Fails without touching either combatant if one of them is already
    /// defeated or was conditioned by an earlier battle.
    pub fn start(
        config: GameConfig,
        first: Combatant,
        second: Combatant,
        arena: Arena,
        sink: S,
    ) -> Result<Self, BattleError> {
        for combatant in [&first, &second] {
            if !combatant.is_alive() {
                return Err(BattleError::CombatantDefeated {
                    name: combatant.name().to_string(),
                });
            }
            if let Some(previous) = combatant.conditioned_by() {
                return Err(EnvironmentError::AlreadyConditioned {
                    combatant: combatant.name().to_string(),
                    previous,
                }
                .into());
            }
        }

        let mut battle = Self {
            config,
            arena,
            combatants: [first, second],
            attacker: Side::PlayerOne,
            turn: 1,
            phase: BattlePhase::Resolving,
            outcome: None,
            opening: Vec::new(),
            sink,
        };

        let mut events = vec![BattleEvent::BattleStarted {
            arena: battle.arena.name().to_string(),
            environment: battle.arena.environment(),
            first: battle.combatants[0].name().to_string(),
            second: battle.combatants[1].name().to_string(),
        }];

        let environment = battle.arena.environment();
        for combatant in &mut battle.combatants {
            env::apply(combatant, environment)?;
            events.push(BattleEvent::EnvironmentApplied {
                combatant: combatant.name().to_string(),
                environment,
                attack: combatant.attack(),
                defense: combatant.defense(),
                health: combatant.health(),
            });
        }

        battle.begin_turn(&mut events);
        battle.phase = BattlePhase::AwaitingAction(battle.attacker);
        battle.flush(&events);
        battle.opening = events;

        Ok(battle)
    }

    /// Resolves one action for the current attacker.
    pub fn submit(&mut self, action: BattleAction) -> Result<TurnReport, ActionError> {
        let actor = match self.phase {
            BattlePhase::AwaitingAction(side) => side,
            _ => {
                return Err(ActionError::BattleOver {
                    context: self.error_context(),
                });
            }
        };
        let turn = self.turn;
        let mut events = Vec::new();

        match action {
            BattleAction::Attack => {
                self.phase = BattlePhase::Resolving;
                self.resolve_strike(actor, &mut events);
            }
            BattleAction::Ability => {
                let context = self.error_context().with_side(actor);
                let activation = self.combatants[actor.index()]
                    .activate()
                    .map_err(|source| ActionError::Ability { source, context })?;

                self.phase = BattlePhase::Resolving;
                events.push(BattleEvent::AbilityActivated {
                    combatant: self.combatant(actor).name().to_string(),
                    ability: activation.ability,
                    informational: activation.informational,
                });
                if activation.bonus_attack {
                    self.resolve_bonus_strike(actor, &mut events);
                }
            }
        }

        self.phase = BattlePhase::CheckDefeat;
        let outcome = self.check_defeat(actor, &mut events);
        match outcome {
            Some(outcome) => {
                events.push(BattleEvent::BattleEnded {
                    winner: self.combatant(outcome.winner).name().to_string(),
                    loser: self.combatant(outcome.loser).name().to_string(),
                    turns: outcome.turns,
                });
                self.outcome = Some(outcome);
                self.phase = BattlePhase::Over;
            }
            None => {
                self.phase = BattlePhase::Swap;
                self.attacker = actor.opponent();
                self.turn += 1;
                self.begin_turn(&mut events);
                self.phase = BattlePhase::AwaitingAction(self.attacker);
            }
        }

        self.flush(&events);

        Ok(TurnReport {
            turn,
            actor,
            action,
            events,
            outcome,
        })
    }

    /// Actions the current attacker may submit. Empty once the battle is over.
    pub fn available_actions(&self) -> Vec<BattleAction> {
        let Some(actor) = self.current_actor() else {
            return Vec::new();
        };
        let mut actions = vec![BattleAction::Attack];
        if self.combatant(actor).cooldown().is_ready() {
            actions.push(BattleAction::Ability);
        }
        actions
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Side whose turn it is, or `None` once the battle is over.
    pub fn current_actor(&self) -> Option<Side> {
        match self.phase {
            BattlePhase::AwaitingAction(side) => Some(side),
            _ => None,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Events emitted while the battle was set up.
    pub fn opening_events(&self) -> &[BattleEvent] {
        &self.opening
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Ends the session and hands back both combatants and the sink.
    ///
    /// Environment changes stay on the combatants.
    pub fn into_parts(self) -> (Combatant, Combatant, S) {
        let [first, second] = self.combatants;
        (first, second, self.sink)
    }

    fn error_context(&self) -> ErrorContext {
        ErrorContext::new(self.turn)
    }

    fn flush(&mut self, events: &[BattleEvent]) {
        for event in events {
            self.sink.record(event);
        }
    }
}

impl<S: EventSink> core::fmt::Debug for Battle<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Battle")
            .field("arena", &self.arena)
            .field("combatants", &self.combatants)
            .field("turn", &self.turn)
            .field("phase", &self.phase)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}
