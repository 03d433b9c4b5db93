use core::fmt;

use crate::env::Environment;
use crate::state::{AbilityKind, AbilityStatus, ClassKit, CombatClass, Cooldown};

/// Health and combat stats.
///
/// `max_health` is fixed at creation. `attack` and `defense` may be changed
/// permanently by an arena environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Vitals {
    /// Full-health vitals.
    pub const fn new(max_health: u32, attack: u32, defense: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            attack,
            defense,
        }
    }
}

/// Capability view of a Reflector's ability state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReflectState {
    pub reflecting: bool,
}

/// Capability view of a Champion's ability state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResurrectionState {
    pub revived: bool,
}

/// Short ability status shown next to a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityBadge {
    Active,
    Ready,
    Cooldown { remaining: u32 },
    Passive,
    Spent,
}

impl fmt::Display for AbilityBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbilityBadge::Active => write!(f, "[Active]"),
            AbilityBadge::Ready => write!(f, "[Ready]"),
            AbilityBadge::Cooldown { remaining } => write!(f, "[Cooldown: {remaining}]"),
            AbilityBadge::Passive => write!(f, "[Passive]"),
            AbilityBadge::Spent => write!(f, "[Used]"),
        }
    }
}

/// A fighter taking part in arena battles.
///
/// Health is clamped to `0..=max_health` by every mutator. The cooldown's
/// readiness is derived from its remaining turns, so READY always means zero
/// turns left.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    level: u32,
    vitals: Vitals,
    cooldown: Cooldown,
    kit: ClassKit,
    conditioned_by: Option<Environment>,
}

impl Combatant {
    /// Creates a combatant with the class's base stats for `level`.
    pub fn new(name: impl Into<String>, class: CombatClass, level: u32) -> Self {
        Self::builder(name, class).level(level).build()
    }

    pub fn builder(name: impl Into<String>, class: CombatClass) -> CombatantBuilder {
        CombatantBuilder::new(name, class)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn class(&self) -> CombatClass {
        self.kit.class()
    }

    pub fn ability(&self) -> AbilityKind {
        self.class().ability()
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn health(&self) -> u32 {
        self.vitals.health
    }

    pub fn max_health(&self) -> u32 {
        self.vitals.max_health
    }

    pub fn attack(&self) -> u32 {
        self.vitals.attack
    }

    pub fn defense(&self) -> u32 {
        self.vitals.defense
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    pub fn ability_status(&self) -> AbilityStatus {
        self.cooldown.status()
    }

    pub fn kit(&self) -> &ClassKit {
        &self.kit
    }

    /// Environment that has already conditioned this combatant, if any.
    pub fn conditioned_by(&self) -> Option<Environment> {
        self.conditioned_by
    }

    pub fn is_alive(&self) -> bool {
        self.vitals.health > 0
    }

    /// Sets health, clamped to `0..=max_health`.
    pub fn set_health(&mut self, health: u32) {
        self.vitals.health = health.min(self.vitals.max_health);
    }

    /// Removes up to `amount` health and returns how much was actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.vitals.health;
        self.vitals.health = crate::combat::damage::apply_damage(before, amount);
        before - self.vitals.health
    }

    pub fn as_reflector(&self) -> Option<ReflectState> {
        match self.kit {
            ClassKit::Reflector { reflecting } => Some(ReflectState { reflecting }),
            _ => None,
        }
    }

    pub fn as_champion(&self) -> Option<ResurrectionState> {
        match self.kit {
            ClassKit::Champion { revived } => Some(ResurrectionState { revived }),
            _ => None,
        }
    }

    pub fn ability_badge(&self) -> AbilityBadge {
        if let Some(champion) = self.as_champion() {
            return if champion.revived {
                AbilityBadge::Spent
            } else {
                AbilityBadge::Passive
            };
        }
        if self.kit.is_armed() {
            AbilityBadge::Active
        } else if self.cooldown.is_ready() {
            AbilityBadge::Ready
        } else {
            AbilityBadge::Cooldown {
                remaining: self.cooldown.remaining(),
            }
        }
    }

    pub(crate) fn kit_mut(&mut self) -> &mut ClassKit {
        &mut self.kit
    }

    pub(crate) fn cooldown_mut(&mut self) -> &mut Cooldown {
        &mut self.cooldown
    }

    pub(crate) fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub(crate) fn mark_conditioned(&mut self, environment: Environment) {
        self.conditioned_by = Some(environment);
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level {} {}) HP: {}/{} ATK: {} DEF: {}",
            self.name,
            self.level,
            self.class().title(),
            self.vitals.health,
            self.vitals.max_health,
            self.vitals.attack,
            self.vitals.defense,
        )
    }
}

/// Builder for combatants with explicit stat overrides.
#[derive(Clone, Debug)]
pub struct CombatantBuilder {
    name: String,
    class: CombatClass,
    level: u32,
    max_health: Option<u32>,
    attack: Option<u32>,
    defense: Option<u32>,
}

impl CombatantBuilder {
    pub fn new(name: impl Into<String>, class: CombatClass) -> Self {
        Self {
            name: name.into(),
            class,
            level: 1,
            max_health: None,
            attack: None,
            defense: None,
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Overrides max health; the combatant starts at full health.
    pub fn health(mut self, max_health: u32) -> Self {
        self.max_health = Some(max_health);
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn defense(mut self, defense: u32) -> Self {
        self.defense = Some(defense);
        self
    }

    pub fn build(self) -> Combatant {
        let base = self.class.base_vitals(self.level);
        let vitals = Vitals::new(
            self.max_health.unwrap_or(base.max_health),
            self.attack.unwrap_or(base.attack),
            self.defense.unwrap_or(base.defense),
        );

        Combatant {
            name: self.name,
            level: self.level,
            vitals,
            cooldown: Cooldown::new(self.class.cooldown_length()),
            kit: ClassKit::new(self.class),
            conditioned_by: None,
        }
    }
}
