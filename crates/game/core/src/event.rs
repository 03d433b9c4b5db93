//! Battle events and the sink contract used to observe them.
//!
//! The engine emits a [`BattleEvent`] after every notable state change. Sinks
//! are best-effort observers: recording can never fail from the engine's
//! point of view, so implementations swallow their own I/O errors.

use core::fmt;

use crate::env::Environment;
use crate::state::AbilityKind;

/// Notable state change during a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    BattleStarted {
        arena: String,
        environment: Environment,
        first: String,
        second: String,
    },
    EnvironmentApplied {
        combatant: String,
        environment: Environment,
        attack: u32,
        defense: u32,
        health: u32,
    },
    TurnStarted {
        turn: u32,
        actor: String,
    },
    AbilityReady {
        combatant: String,
        ability: AbilityKind,
    },
    AbilityExpired {
        combatant: String,
        ability: AbilityKind,
    },
    AbilityActivated {
        combatant: String,
        ability: AbilityKind,
        informational: bool,
    },
    AttackHit {
        attacker: String,
        defender: String,
        damage: u32,
        remaining: u32,
    },
    AttackIntercepted {
        attacker: String,
        defender: String,
        ability: AbilityKind,
    },
    DamageReflected {
        reflector: String,
        attacker: String,
        damage: u32,
        remaining: u32,
    },
    Resurrected {
        combatant: String,
        health: u32,
    },
    Defeated {
        combatant: String,
    },
    BattleEnded {
        winner: String,
        loser: String,
        turns: u32,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::BattleStarted {
                arena,
                environment,
                first,
                second,
            } => write!(
                f,
                "Battle started in {arena} ({} environment) between {first} and {second}",
                environment.title()
            ),
            BattleEvent::EnvironmentApplied {
                combatant,
                environment,
                attack,
                defense,
                health,
            } => write!(
                f,
                "{} conditions {combatant}: ATK {attack}, DEF {defense}, HP {health}",
                environment.title()
            ),
            BattleEvent::TurnStarted { turn, actor } => write!(f, "Turn {turn}: {actor}'s turn"),
            BattleEvent::AbilityReady { combatant, ability } => {
                write!(f, "{combatant}'s {} is ready", ability.title())
            }
            BattleEvent::AbilityExpired { combatant, ability } => {
                write!(f, "{combatant}'s {} wears off", ability.title())
            }
            BattleEvent::AbilityActivated {
                combatant,
                ability,
                informational: false,
            } => write!(f, "{combatant} uses {}", ability.title()),
            BattleEvent::AbilityActivated {
                combatant,
                ability,
                informational: true,
            } => write!(
                f,
                "{combatant}'s {} is passive and triggers on defeat",
                ability.title()
            ),
            BattleEvent::AttackHit {
                attacker,
                defender,
                damage,
                remaining,
            } => write!(
                f,
                "{attacker} hits {defender} for {damage} damage ({remaining} HP left)"
            ),
            BattleEvent::AttackIntercepted {
                attacker,
                defender,
                ability,
            } => write!(
                f,
                "{attacker}'s attack is nullified by {defender}'s {}",
                ability.title()
            ),
            BattleEvent::DamageReflected {
                reflector,
                attacker,
                damage,
                remaining,
            } => write!(
                f,
                "{reflector} reflects {damage} damage back to {attacker} ({remaining} HP left)"
            ),
            BattleEvent::Resurrected { combatant, health } => {
                write!(f, "{combatant} rises again with {health} HP")
            }
            BattleEvent::Defeated { combatant } => write!(f, "{combatant} has been defeated"),
            BattleEvent::BattleEnded {
                winner,
                loser,
                turns,
            } => write!(f, "{winner} defeats {loser} after {turns} turn(s)"),
        }
    }
}

/// Append-only observer of battle events.
pub trait EventSink {
    fn record(&mut self, event: &BattleEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: &BattleEvent) {
        (**self).record(event);
    }
}

impl<S: EventSink> EventSink for Option<S> {
    fn record(&mut self, event: &BattleEvent) {
        if let Some(sink) = self {
            sink.record(event);
        }
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &BattleEvent) {}
}

/// Sink that keeps events in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecSink {
    events: Vec<BattleEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        core::mem::take(&mut self.events)
    }
}

impl EventSink for VecSink {
    fn record(&mut self, event: &BattleEvent) {
        self.events.push(event.clone());
    }
}
