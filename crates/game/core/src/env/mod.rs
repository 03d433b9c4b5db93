//! Arena environments and the one-time stat modifier they apply.
//!
//! Each [`Environment`] maps to a fixed [`EnvironmentEffect`] expressed as
//! whole percentages. [`apply`] conditions a combatant exactly once; a second
//! application is rejected with [`EnvironmentError::AlreadyConditioned`].
mod arena;
mod error;

pub use arena::Arena;
pub use error::EnvironmentError;

use crate::combat::percent_of;
use crate::state::Combatant;

/// Kind of battlefield an arena provides.
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
pub enum Environment {
    Fire,
    Ice,
    Jungle,
    Desert,
    Mountain,
}

/// Stat multipliers in percent. 100 leaves a stat untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentEffect {
    pub attack_percent: u32,
    pub defense_percent: u32,
    /// Scales current health only. Max health is never rescaled.
    pub health_percent: u32,
}

impl EnvironmentEffect {
    pub const fn new(attack_percent: u32, defense_percent: u32, health_percent: u32) -> Self {
        Self {
            attack_percent,
            defense_percent,
            health_percent,
        }
    }
}

impl Environment {
    pub const ALL: [Environment; 5] = [
        Environment::Fire,
        Environment::Ice,
        Environment::Jungle,
        Environment::Desert,
        Environment::Mountain,
    ];

    pub const fn effect(self) -> EnvironmentEffect {
        match self {
            Environment::Fire => EnvironmentEffect::new(120, 90, 100),
            Environment::Ice => EnvironmentEffect::new(90, 120, 100),
            Environment::Jungle => EnvironmentEffect::new(110, 110, 100),
            Environment::Desert => EnvironmentEffect::new(130, 100, 90),
            Environment::Mountain => EnvironmentEffect::new(80, 140, 100),
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Environment::Fire => "Fire",
            Environment::Ice => "Ice",
            Environment::Jungle => "Jungle",
            Environment::Desert => "Desert",
            Environment::Mountain => "Mountain",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Environment::Fire => "Boosts attack, reduces defense",
            Environment::Ice => "Reduces attack, boosts defense",
            Environment::Jungle => "Balanced boost to attack and defense",
            Environment::Desert => "Major attack boost, slight health reduction",
            Environment::Mountain => "Reduces attack, greatly boosts defense",
        }
    }
}

/// Applies `environment` to `combatant`, permanently.
///
/// Fails if the combatant was already conditioned by any environment, so stat
/// changes never stack.
pub fn apply(combatant: &mut Combatant, environment: Environment) -> Result<(), EnvironmentError> {
    if let Some(previous) = combatant.conditioned_by() {
        return Err(EnvironmentError::AlreadyConditioned {
            combatant: combatant.name().to_string(),
            previous,
        });
    }

    let effect = environment.effect();
    let vitals = combatant.vitals_mut();
    vitals.attack = percent_of(vitals.attack, effect.attack_percent);
    vitals.defense = percent_of(vitals.defense, effect.defense_percent);
    vitals.health = percent_of(vitals.health, effect.health_percent).min(vitals.max_health);

    combatant.mark_conditioned(environment);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CombatClass;

    #[test]
    fn fire_conditions_fighter_and_caster() {
        let mut fighter = Combatant::new("Brann", CombatClass::Fighter, 1);
        let mut caster = Combatant::new("Ysolde", CombatClass::Caster, 1);

        apply(&mut fighter, Environment::Fire).unwrap();
        apply(&mut caster, Environment::Fire).unwrap();

        assert_eq!((fighter.attack(), fighter.defense()), (21, 10));
        assert_eq!((caster.attack(), caster.defense()), (27, 5));
        assert_eq!(fighter.conditioned_by(), Some(Environment::Fire));
    }

    #[test]
    fn desert_scales_health_but_not_max_health() {
        let mut reflector = Combatant::new("Vael", CombatClass::Reflector, 1);
        apply(&mut reflector, Environment::Desert).unwrap();

        // 108 * 0.9 = 97.2
        assert_eq!(reflector.health(), 97);
        assert_eq!(reflector.max_health(), 108);
        // 19 * 1.3 = 24.7
        assert_eq!(reflector.attack(), 24);
        assert_eq!(reflector.defense(), 11);
    }

    #[test]
    fn mountain_and_ice_truncate() {
        let mut champion = Combatant::new("Auric", CombatClass::Champion, 1);
        apply(&mut champion, Environment::Mountain).unwrap();
        // 26 * 0.8 = 20.8, 14 * 1.4 = 19.6
        assert_eq!((champion.attack(), champion.defense()), (20, 19));

        let mut marksman = Combatant::new("Kestrel", CombatClass::Marksman, 1);
        apply(&mut marksman, Environment::Ice).unwrap();
        // 21 * 0.9 = 18.9, 9 * 1.2 = 10.8
        assert_eq!((marksman.attack(), marksman.defense()), (18, 10));
    }

    #[test]
    fn second_application_is_rejected_and_changes_nothing() {
        let mut fighter = Combatant::new("Brann", CombatClass::Fighter, 1);
        apply(&mut fighter, Environment::Jungle).unwrap();
        let conditioned = fighter.clone();

        let err = apply(&mut fighter, Environment::Fire).unwrap_err();
        assert!(matches!(
            err,
            EnvironmentError::AlreadyConditioned {
                previous: Environment::Jungle,
                ..
            }
        ));
        assert_eq!(fighter, conditioned);
    }

    #[test]
    fn environment_names_parse() {
        assert_eq!("FIRE".parse::<Environment>().ok(), Some(Environment::Fire));
        assert_eq!(Environment::Mountain.to_string(), "mountain");
    }
}
