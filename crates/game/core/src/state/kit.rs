//! Combat classes and their special ability kits.
//!
//! Every class owns exactly one special ability. The transient state of that
//! ability lives in [`ClassKit`], a tagged variant matched on directly instead
//! of comparing class names.

use crate::config::GameConfig;
use crate::state::Vitals;

/// Playable combat class.
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
pub enum CombatClass {
    /// Heavy melee fighter; can turn aside the next attack completely.
    Fighter,
    /// Spellcaster with high attack and thin defense.
    Caster,
    /// Ranged attacker that rolls out of harm's way and fires on the move.
    Marksman,
    /// Legendary hero that rises once after falling.
    Champion,
    /// Duelist that turns absorbed blows back on the attacker.
    Reflector,
}

impl CombatClass {
    pub const ALL: [CombatClass; 5] = [
        CombatClass::Fighter,
        CombatClass::Caster,
        CombatClass::Marksman,
        CombatClass::Champion,
        CombatClass::Reflector,
    ];

    /// Highest level a roster character may have.
    pub const MAX_LEVEL: u32 = 1_000;

    /// Starting vitals for a combatant of this class at `level`.
    ///
    /// Stats saturate at `u32::MAX` for levels far beyond [`Self::MAX_LEVEL`].
    pub const fn base_vitals(self, level: u32) -> Vitals {
        let (health, attack, defense) = match self {
            CombatClass::Fighter => (
                scale(100, 20, level),
                scale(15, 3, level),
                scale(10, 2, level),
            ),
            CombatClass::Caster => (
                scale(70, 15, level),
                scale(20, 3, level),
                scale(5, 1, level),
            ),
            CombatClass::Marksman => (
                scale(80, 15, level),
                scale(18, 3, level),
                scale(7, 2, level),
            ),
            CombatClass::Champion => (
                scale(120, 25, level),
                scale(22, 4, level),
                scale(12, 2, level),
            ),
            CombatClass::Reflector => (
                scale(90, 18, level),
                scale(16, 3, level),
                scale(9, 2, level),
            ),
        };
        Vitals::new(health, attack, defense)
    }

    /// Turns the special ability stays unavailable after use.
    pub const fn cooldown_length(self) -> u32 {
        match self {
            CombatClass::Champion => 0,
            _ => GameConfig::ABILITY_COOLDOWN,
        }
    }

    /// Divisor applied to the target's defense by this class's attack formula.
    pub const fn defense_divisor(self) -> u32 {
        match self {
            CombatClass::Fighter => 2,
            CombatClass::Marksman => 4,
            CombatClass::Caster | CombatClass::Champion | CombatClass::Reflector => 3,
        }
    }

    pub const fn ability(self) -> AbilityKind {
        match self {
            CombatClass::Fighter => AbilityKind::Stoneskin,
            CombatClass::Caster => AbilityKind::MirrorImage,
            CombatClass::Marksman => AbilityKind::EvasiveRoll,
            CombatClass::Champion => AbilityKind::Resurrection,
            CombatClass::Reflector => AbilityKind::MirrorStrike,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            CombatClass::Fighter => "Fighter",
            CombatClass::Caster => "Caster",
            CombatClass::Marksman => "Marksman",
            CombatClass::Champion => "Champion",
            CombatClass::Reflector => "Reflector",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            CombatClass::Fighter => "Tough melee fighter. Stoneskin shrugs off the next attack.",
            CombatClass::Caster => {
                "Powerful spellcaster. Mirror Image makes the next attack miss."
            }
            CombatClass::Marksman => {
                "Agile archer. Evasive Roll dodges the next attack and fires a piercing shot."
            }
            CombatClass::Champion => {
                "Legendary hero. Rises once with a quarter of their health after falling."
            }
            CombatClass::Reflector => {
                "Mirror duelist. Mirror Strike returns a quarter of the next blow taken."
            }
        }
    }
}

const fn scale(base: u32, per_level: u32, level: u32) -> u32 {
    base.saturating_add(per_level.saturating_mul(level))
}

/// Special ability owned by a combat class.
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
pub enum AbilityKind {
    /// Fighter: immune to the next incoming attack.
    Stoneskin,
    /// Caster: the next incoming attack misses.
    MirrorImage,
    /// Marksman: evades the next incoming attack and fires a bonus shot.
    EvasiveRoll,
    /// Champion: passive revival after the first defeat.
    Resurrection,
    /// Reflector: reflects part of the next absorbed hit.
    MirrorStrike,
}

impl AbilityKind {
    pub const fn title(self) -> &'static str {
        match self {
            AbilityKind::Stoneskin => "Stoneskin",
            AbilityKind::MirrorImage => "Mirror Image",
            AbilityKind::EvasiveRoll => "Evasive Roll",
            AbilityKind::Resurrection => "Resurrection",
            AbilityKind::MirrorStrike => "Mirror Strike",
        }
    }
}

/// Per-class ability state.
///
/// Fighter, Caster and Marksman flags are one-turn interrupts. The Reflector
/// flag persists until a hit is reflected or its owner's next turn begins.
/// The Champion tracks whether its single resurrection has been spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassKit {
    Fighter { immune: bool },
    Caster { mirror_image: bool },
    Marksman { evasive: bool },
    Champion { revived: bool },
    Reflector { reflecting: bool },
}

impl ClassKit {
    /// Fresh kit for `class` with nothing armed.
    pub const fn new(class: CombatClass) -> Self {
        match class {
            CombatClass::Fighter => ClassKit::Fighter { immune: false },
            CombatClass::Caster => ClassKit::Caster {
                mirror_image: false,
            },
            CombatClass::Marksman => ClassKit::Marksman { evasive: false },
            CombatClass::Champion => ClassKit::Champion { revived: false },
            CombatClass::Reflector => ClassKit::Reflector { reflecting: false },
        }
    }

    pub const fn class(&self) -> CombatClass {
        match self {
            ClassKit::Fighter { .. } => CombatClass::Fighter,
            ClassKit::Caster { .. } => CombatClass::Caster,
            ClassKit::Marksman { .. } => CombatClass::Marksman,
            ClassKit::Champion { .. } => CombatClass::Champion,
            ClassKit::Reflector { .. } => CombatClass::Reflector,
        }
    }

    /// True while an activatable ability effect is armed.
    pub const fn is_armed(&self) -> bool {
        match *self {
            ClassKit::Fighter { immune } => immune,
            ClassKit::Caster { mirror_image } => mirror_image,
            ClassKit::Marksman { evasive } => evasive,
            ClassKit::Reflector { reflecting } => reflecting,
            ClassKit::Champion { .. } => false,
        }
    }

    /// Defensive interrupt that would nullify the next incoming attack.
    pub const fn interrupt(&self) -> Option<AbilityKind> {
        match *self {
            ClassKit::Fighter { immune: true } => Some(AbilityKind::Stoneskin),
            ClassKit::Caster { mirror_image: true } => Some(AbilityKind::MirrorImage),
            ClassKit::Marksman { evasive: true } => Some(AbilityKind::EvasiveRoll),
            _ => None,
        }
    }

    /// Arms the class ability. The Champion has nothing to arm.
    pub(crate) fn arm(&mut self) {
        self.set_armed(true);
    }

    /// Disarms the class ability, returning true if something was armed.
    pub(crate) fn disarm(&mut self) -> bool {
        let was_armed = self.is_armed();
        self.set_armed(false);
        was_armed
    }

    fn set_armed(&mut self, value: bool) {
        match self {
            ClassKit::Fighter { immune } => *immune = value,
            ClassKit::Caster { mirror_image } => *mirror_image = value,
            ClassKit::Marksman { evasive } => *evasive = value,
            ClassKit::Reflector { reflecting } => *reflecting = value,
            ClassKit::Champion { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_round_trips_class() {
        for class in CombatClass::ALL {
            assert_eq!(ClassKit::new(class).class(), class);
            assert!(!ClassKit::new(class).is_armed());
        }
    }

    #[test]
    fn only_one_turn_flags_are_interrupts() {
        let mut reflector = ClassKit::new(CombatClass::Reflector);
        reflector.arm();
        assert!(reflector.is_armed());
        assert_eq!(reflector.interrupt(), None);

        let mut caster = ClassKit::new(CombatClass::Caster);
        caster.arm();
        assert_eq!(caster.interrupt(), Some(AbilityKind::MirrorImage));
        assert!(caster.disarm());
        assert!(!caster.disarm());
    }

    #[test]
    fn champion_cannot_be_armed() {
        let mut champion = ClassKit::new(CombatClass::Champion);
        champion.arm();
        assert!(!champion.is_armed());
        assert_eq!(CombatClass::Champion.cooldown_length(), 0);
    }

    #[test]
    fn base_vitals_scale_with_level() {
        let fighter = CombatClass::Fighter.base_vitals(1);
        assert_eq!((fighter.max_health, fighter.attack, fighter.defense), (120, 18, 12));

        let caster = CombatClass::Caster.base_vitals(1);
        assert_eq!((caster.max_health, caster.attack, caster.defense), (85, 23, 6));

        let champion = CombatClass::Champion.base_vitals(4);
        assert_eq!((champion.max_health, champion.attack, champion.defense), (220, 38, 20));
    }

    #[test]
    fn huge_levels_saturate_instead_of_overflowing() {
        let champion = CombatClass::Champion.base_vitals(4_000_000_000);
        assert_eq!(champion.max_health, u32::MAX);
        assert_eq!(champion.attack, u32::MAX);

        let top = CombatClass::Champion.base_vitals(CombatClass::MAX_LEVEL);
        assert_eq!(top.max_health, 25_120);
    }

    #[test]
    fn class_names_parse() {
        assert_eq!("MARKSMAN".parse::<CombatClass>().ok(), Some(CombatClass::Marksman));
        assert_eq!(AbilityKind::MirrorStrike.to_string(), "mirror_strike");
        assert_eq!(AbilityKind::MirrorStrike.title(), "Mirror Strike");
    }
}
