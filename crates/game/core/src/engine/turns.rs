use crate::config::GameConfig;
use crate::event::{BattleEvent, EventSink};
use crate::state::Combatant;

use super::{Battle, BattleOutcome, Side};

/// Turn bookkeeping for Battle.
impl<S: EventSink> Battle<S> {
    /// Upkeep for the combatant about to act.
    ///
    /// From turn 2 onward its cooldown ticks down, then any of its own effects
    /// that survived the opponent's turn expire.
    pub(super) fn begin_turn(&mut self, events: &mut Vec<BattleEvent>) {
        let turn = self.turn;
        let index = self.attacker.index();
        let combatant = &mut self.combatants[index];
        events.push(BattleEvent::TurnStarted {
            turn,
            actor: combatant.name().to_string(),
        });

        if turn > 1 && combatant.tick_cooldown() {
            events.push(BattleEvent::AbilityReady {
                combatant: combatant.name().to_string(),
                ability: combatant.ability(),
            });
        }
        if let Some(ability) = combatant.expire_interrupts() {
            events.push(BattleEvent::AbilityExpired {
                combatant: combatant.name().to_string(),
                ability,
            });
        }
    }

    /// One attack from `actor` against its opponent.
    pub(super) fn resolve_strike(&mut self, actor: Side, events: &mut Vec<BattleEvent>) {
        self.strike_from(actor, Strike::Interruptible, events);
    }

    /// The Marksman's bonus shot. It ignores the defender's interrupts but can
    /// still be reflected.
    pub(super) fn resolve_bonus_strike(&mut self, actor: Side, events: &mut Vec<BattleEvent>) {
        self.strike_from(actor, Strike::Piercing, events);
    }

    fn strike_from(&mut self, actor: Side, kind: Strike, events: &mut Vec<BattleEvent>) {
        let [first, second] = &mut self.combatants;
        let (attacker, defender) = match actor {
            Side::PlayerOne => (first, second),
            Side::PlayerTwo => (second, first),
        };
        strike(attacker, defender, kind, &self.config, events);
    }

    /// Looks for defeated combatants, defender first.
    ///
    /// A Champion that has not revived yet is brought back instead of losing.
    /// When both sides stay down, player two wins.
    pub(super) fn check_defeat(
        &mut self,
        actor: Side,
        events: &mut Vec<BattleEvent>,
    ) -> Option<BattleOutcome> {
        let mut fallen = Vec::with_capacity(2);
        for side in [actor.opponent(), actor] {
            let combatant = &mut self.combatants[side.index()];
            if combatant.is_alive() {
                continue;
            }

            if let Some(health) = combatant.try_resurrect(&self.config) {
                events.push(BattleEvent::Resurrected {
                    combatant: combatant.name().to_string(),
                    health,
                });
                if combatant.is_alive() {
                    continue;
                }
            }

            events.push(BattleEvent::Defeated {
                combatant: combatant.name().to_string(),
            });
            fallen.push(side);
        }

        let loser = match fallen.as_slice() {
            [] => return None,
            [side] => *side,
            _ => Side::PlayerOne,
        };
        Some(BattleOutcome {
            winner: loser.opponent(),
            loser,
            turns: self.turn,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Strike {
    Interruptible,
    Piercing,
}

/// Defender interrupts are checked first unless the strike pierces them; a
/// nullified attack deals nothing and triggers no reflection.
fn strike(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    kind: Strike,
    config: &GameConfig,
    events: &mut Vec<BattleEvent>,
) {
    let interrupt = match kind {
        Strike::Interruptible => defender.intercept(),
        Strike::Piercing => None,
    };
    if let Some(ability) = interrupt {
        events.push(BattleEvent::AttackIntercepted {
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
            ability,
        });
        return;
    }

    let damage = attacker.strike(defender, config);
    events.push(BattleEvent::AttackHit {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        damage,
        remaining: defender.health(),
    });

    if let Some(reflected) = defender.reflect_back(damage, config) {
        let lost = attacker.take_damage(reflected);
        events.push(BattleEvent::DamageReflected {
            reflector: defender.name().to_string(),
            attacker: attacker.name().to_string(),
            damage: lost,
            remaining: attacker.health(),
        });
    }
}
