//! Special ability engine.
//!
//! Every class answers the same questions, dispatched by matching on
//! [`ClassKit`]:
//!
//! - [`Combatant::activate`]: arm the ability and start its cooldown
//! - [`Combatant::intercept`]: would an armed interrupt nullify an incoming attack?
//! - [`Combatant::reflect_back`]: how much of an absorbed hit bounces back?
//! - [`Combatant::expire_interrupts`]: clear effects left over from the last turn
//! - [`Combatant::attack_resolve`]: damage this combatant deals to a target
//!
//! Interrupts are checked before any damage is computed. A hit that was
//! intercepted therefore never reaches the reflect step. The Marksman's bonus
//! shot skips the interrupt check but can still be reflected.

use crate::combat::{calculate_damage, percent_of, reflected_damage};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AbilityKind, ClassKit, Combatant};

/// Result of a successful ability activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activation {
    pub ability: AbilityKind,
    /// The activating Marksman fires one extra attack this turn.
    pub bonus_attack: bool,
    /// Activation only announces a passive ability and changes no state.
    pub informational: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityError {
    #[error("{ability} is on cooldown for {remaining} more turn(s)")]
    OnCooldown { ability: AbilityKind, remaining: u32 },
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OnCooldown { .. } => "ABILITY_ON_COOLDOWN",
        }
    }
}

impl Combatant {
    /// Activates the special ability.
    ///
    /// Arms the class effect and starts the full cooldown. The Champion's
    /// resurrection is passive: activating it is accepted but changes nothing.
    pub fn activate(&mut self) -> Result<Activation, AbilityError> {
        let ability = self.ability();
        if !self.cooldown().is_ready() {
            return Err(AbilityError::OnCooldown {
                ability,
                remaining: self.cooldown().remaining(),
            });
        }

        let kit = self.kit_mut();
        if let ClassKit::Champion { .. } = kit {
            return Ok(Activation {
                ability,
                bonus_attack: false,
                informational: true,
            });
        }

        kit.arm();
        let bonus_attack = matches!(kit, ClassKit::Marksman { .. });
        self.cooldown_mut().reset();

        Ok(Activation {
            ability,
            bonus_attack,
            informational: false,
        })
    }

    /// Consumes an armed defensive interrupt, if any.
    ///
    /// Returns the ability that nullified the incoming attack.
    pub fn intercept(&mut self) -> Option<AbilityKind> {
        let interrupt = self.kit().interrupt()?;
        self.kit_mut().disarm();
        Some(interrupt)
    }

    /// Reflects part of an absorbed hit back at the attacker.
    ///
    /// Only an armed Reflector reflects, and only once: the flag is consumed.
    pub fn reflect_back(&mut self, absorbed: u32, config: &GameConfig) -> Option<u32> {
        if absorbed == 0 {
            return None;
        }
        match self.kit_mut() {
            ClassKit::Reflector { reflecting } if *reflecting => {
                *reflecting = false;
                Some(reflected_damage(absorbed, config.reflect_percent))
            }
            _ => None,
        }
    }

    /// Clears ability effects that survived since this combatant's last turn.
    ///
    /// Returns the ability that expired unused.
    pub fn expire_interrupts(&mut self) -> Option<AbilityKind> {
        let ability = self.ability();
        self.kit_mut().disarm().then_some(ability)
    }

    /// Damage this combatant's attack would deal to `target`.
    ///
    /// An evasive Marksman counts only part of the target's defense. No other
    /// flag changes the outgoing formula.
    pub fn attack_resolve(&self, target: &Combatant, config: &GameConfig) -> u32 {
        let defense = match self.kit() {
            ClassKit::Marksman { evasive: true } => {
                percent_of(target.defense(), config.evasive_defense_percent)
            }
            _ => target.defense(),
        };
        calculate_damage(self.attack(), defense, self.class().defense_divisor())
    }

    /// Lands an attack on `target` and returns the health it actually lost.
    ///
    /// An evasive Marksman spends its evasion on the attack it makes.
    pub fn strike(&mut self, target: &mut Combatant, config: &GameConfig) -> u32 {
        let damage = self.attack_resolve(target, config);
        if let ClassKit::Marksman { evasive } = self.kit_mut() {
            *evasive = false;
        }
        target.take_damage(damage)
    }

    /// Advances the cooldown by one turn; true when it just became READY.
    pub fn tick_cooldown(&mut self) -> bool {
        self.cooldown_mut().tick()
    }

    /// Revives a fallen Champion once.
    ///
    /// Returns the restored health, or `None` if this combatant cannot revive.
    pub fn try_resurrect(&mut self, config: &GameConfig) -> Option<u32> {
        if self.is_alive() {
            return None;
        }
        match self.kit_mut() {
            ClassKit::Champion { revived } if !*revived => *revived = true,
            _ => return None,
        }
        let health = percent_of(self.max_health(), config.resurrection_percent);
        self.set_health(health);
        Some(self.health())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AbilityStatus, CombatClass};

    fn config() -> GameConfig {
        GameConfig::default()
    }

    mod activation {
        use super::*;

        #[test]
        fn arms_flag_and_starts_cooldown() {
            let mut fighter = Combatant::new("Brann", CombatClass::Fighter, 1);
            let activation = fighter.activate().unwrap();

            assert_eq!(activation.ability, AbilityKind::Stoneskin);
            assert!(!activation.bonus_attack);
            assert!(fighter.kit().is_armed());
            assert_eq!(fighter.ability_status(), AbilityStatus::Cooldown);
            assert_eq!(fighter.cooldown().remaining(), GameConfig::ABILITY_COOLDOWN);
        }

        #[test]
        fn rejected_while_cooling_down() {
            let mut caster = Combatant::new("Ysolde", CombatClass::Caster, 1);
            caster.activate().unwrap();
            caster.expire_interrupts();
            let before = caster.clone();

            let err = caster.activate().unwrap_err();
            assert_eq!(
                err,
                AbilityError::OnCooldown {
                    ability: AbilityKind::MirrorImage,
                    remaining: 3,
                }
            );
            assert_eq!(caster, before);
        }

        #[test]
        fn marksman_requests_bonus_attack() {
            let mut marksman = Combatant::new("Kestrel", CombatClass::Marksman, 1);
            assert!(marksman.activate().unwrap().bonus_attack);
        }

        #[test]
        fn champion_activation_is_informational() {
            let mut champion = Combatant::new("Auric", CombatClass::Champion, 1);
            let before = champion.clone();

            let activation = champion.activate().unwrap();
            assert!(activation.informational);
            assert_eq!(champion, before);
            // Always available again.
            assert!(champion.activate().is_ok());
        }
    }

    mod interrupts {
        use super::*;

        #[test]
        fn interrupt_is_consumed_once() {
            let mut caster = Combatant::new("Ysolde", CombatClass::Caster, 1);
            caster.activate().unwrap();

            assert_eq!(caster.intercept(), Some(AbilityKind::MirrorImage));
            assert_eq!(caster.intercept(), None);
        }

        #[test]
        fn reflector_is_not_an_interrupt() {
            let mut reflector = Combatant::new("Vael", CombatClass::Reflector, 1);
            reflector.activate().unwrap();
            assert_eq!(reflector.intercept(), None);
            assert!(reflector.kit().is_armed());
        }

        #[test]
        fn expire_clears_unused_flag() {
            let mut fighter = Combatant::new("Brann", CombatClass::Fighter, 1);
            assert_eq!(fighter.expire_interrupts(), None);

            fighter.activate().unwrap();
            assert_eq!(fighter.expire_interrupts(), Some(AbilityKind::Stoneskin));
            assert!(!fighter.kit().is_armed());
        }

        #[test]
        fn querying_status_changes_nothing() {
            let mut marksman = Combatant::new("Kestrel", CombatClass::Marksman, 1);
            marksman.activate().unwrap();
            let before = marksman.clone();

            for _ in 0..5 {
                let _ = marksman.ability_status();
                let _ = marksman.ability_badge();
                let _ = marksman.kit().interrupt();
                let _ = marksman.cooldown().is_ready();
            }
            assert_eq!(marksman, before);
        }
    }

    mod reflection {
        use super::*;

        #[test]
        fn reflects_quarter_of_absorbed_damage_once() {
            let mut reflector = Combatant::new("Vael", CombatClass::Reflector, 1);
            reflector.activate().unwrap();

            assert_eq!(reflector.reflect_back(19, &config()), Some(4));
            assert_eq!(reflector.reflect_back(19, &config()), None);
        }

        #[test]
        fn small_hits_reflect_at_least_one() {
            let mut reflector = Combatant::new("Vael", CombatClass::Reflector, 1);
            reflector.activate().unwrap();
            assert_eq!(reflector.reflect_back(2, &config()), Some(1));
        }

        #[test]
        fn own_flag_does_not_change_outgoing_damage() {
            let target = Combatant::new("Brann", CombatClass::Fighter, 1);
            let mut reflector = Combatant::new("Vael", CombatClass::Reflector, 1);

            let idle = reflector.attack_resolve(&target, &config());
            reflector.activate().unwrap();
            assert_eq!(reflector.attack_resolve(&target, &config()), idle);
            // 19 - 12/3
            assert_eq!(idle, 15);
        }
    }

    mod attacks {
        use super::*;

        #[test]
        fn class_formulas() {
            let target = Combatant::builder("Dummy", CombatClass::Fighter)
                .defense(12)
                .build();
            let cfg = config();

            let fighter = Combatant::builder("F", CombatClass::Fighter).attack(20).build();
            let caster = Combatant::builder("C", CombatClass::Caster).attack(20).build();
            let marksman = Combatant::builder("M", CombatClass::Marksman).attack(20).build();
            let champion = Combatant::builder("H", CombatClass::Champion).attack(20).build();

            assert_eq!(fighter.attack_resolve(&target, &cfg), 14);
            assert_eq!(caster.attack_resolve(&target, &cfg), 16);
            assert_eq!(marksman.attack_resolve(&target, &cfg), 17);
            assert_eq!(champion.attack_resolve(&target, &cfg), 16);
        }

        #[test]
        fn evasive_marksman_halves_target_defense_and_spends_evasion() {
            let mut target = Combatant::builder("Dummy", CombatClass::Fighter)
                .defense(17)
                .build();
            let mut marksman = Combatant::builder("M", CombatClass::Marksman).attack(20).build();
            marksman.activate().unwrap();

            // 17 * 50% = 8, 8 / 4 = 2
            assert_eq!(marksman.attack_resolve(&target, &config()), 18);
            assert_eq!(marksman.strike(&mut target, &config()), 18);
            assert!(!marksman.kit().is_armed());
        }

        #[test]
        fn strike_reports_health_actually_lost() {
            let mut target = Combatant::builder("Dummy", CombatClass::Caster)
                .health(5)
                .defense(0)
                .build();
            let mut fighter = Combatant::builder("F", CombatClass::Fighter).attack(30).build();

            assert_eq!(fighter.strike(&mut target, &config()), 5);
            assert_eq!(target.health(), 0);
        }

        #[test]
        fn overwhelming_defense_still_deals_one() {
            let mut target = Combatant::builder("Wall", CombatClass::Fighter)
                .defense(10_000)
                .build();
            for class in CombatClass::ALL {
                let mut attacker = Combatant::new("A", class, 1);
                assert_eq!(attacker.strike(&mut target, &config()), 1);
            }
        }
    }

    mod resurrection {
        use super::*;

        #[test]
        fn champion_revives_exactly_once() {
            let mut champion = Combatant::new("Auric", CombatClass::Champion, 1);
            assert_eq!(champion.try_resurrect(&config()), None);

            champion.take_damage(u32::MAX);
            // floor(145 * 0.25) = 36
            assert_eq!(champion.try_resurrect(&config()), Some(36));
            assert_eq!(champion.health(), 36);
            assert_eq!(champion.as_champion().map(|c| c.revived), Some(true));

            champion.take_damage(u32::MAX);
            assert_eq!(champion.try_resurrect(&config()), None);
            assert!(!champion.is_alive());
        }

        #[test]
        fn other_classes_stay_down() {
            let mut fighter = Combatant::new("Brann", CombatClass::Fighter, 1);
            fighter.take_damage(u32::MAX);
            assert_eq!(fighter.try_resurrect(&config()), None);
        }
    }
}
