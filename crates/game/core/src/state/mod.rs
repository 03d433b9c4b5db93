//! Combatant state representation.
//!
//! This module owns the data that describes a fighter: identity, vitals,
//! cooldown bookkeeping and the per-class ability kit. Stat mutations outside
//! of construction flow through the ability engine, the environment modifier
//! and the battle engine.
mod combatant;
mod cooldown;
mod kit;

pub use combatant::{
    AbilityBadge, Combatant, CombatantBuilder, ReflectState, ResurrectionState, Vitals,
};
pub use cooldown::{AbilityStatus, Cooldown};
pub use kit::{AbilityKind, ClassKit, CombatClass};
