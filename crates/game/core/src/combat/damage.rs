//! Damage calculation and application.

use crate::config::GameConfig;

/// Truncating integer percentage of `value`.
///
/// Computed in 64 bits and saturated, so large stats cannot overflow.
pub fn percent_of(value: u32, percent: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// reduced_damage = attack - (defense / divisor)
/// final_damage = max(reduced_damage, MIN_DAMAGE)
/// ```
///
/// The divisor comes from the attacker's class (Fighter 2, Marksman 4,
/// everyone else 3).
pub fn calculate_damage(attack: u32, defense: u32, divisor: u32) -> u32 {
    let reduction = defense / divisor.max(1);
    attack.saturating_sub(reduction).max(GameConfig::MIN_DAMAGE)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub(crate) fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Damage sent back by a Reflector after absorbing `absorbed` health.
pub fn reflected_damage(absorbed: u32, percent: u32) -> u32 {
    percent_of(absorbed, percent).max(GameConfig::MIN_REFLECT)
}
