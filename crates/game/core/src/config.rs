/// Battle rule constants and tunable parameters.
///
/// Percentages are whole numbers applied with integer arithmetic
/// (`value * percent / 100`), so every rule stays deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Share of post-mitigation damage a Reflector sends back to its attacker.
    pub reflect_percent: u32,
    /// Share of max health a Champion returns with after its first defeat.
    pub resurrection_percent: u32,
    /// Share of the target's defense still counted by an evasive Marksman's attack.
    pub evasive_defense_percent: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Turns an activatable special ability needs before it is READY again.
    pub const ABILITY_COOLDOWN: u32 = 3;
    /// Floor applied to every computed hit.
    pub const MIN_DAMAGE: u32 = 1;
    /// Floor applied to every reflected hit.
    pub const MIN_REFLECT: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REFLECT_PERCENT: u32 = 25;
    pub const DEFAULT_RESURRECTION_PERCENT: u32 = 25;
    pub const DEFAULT_EVASIVE_DEFENSE_PERCENT: u32 = 50;

    pub fn new() -> Self {
        Self {
            reflect_percent: Self::DEFAULT_REFLECT_PERCENT,
            resurrection_percent: Self::DEFAULT_RESURRECTION_PERCENT,
            evasive_defense_percent: Self::DEFAULT_EVASIVE_DEFENSE_PERCENT,
        }
    }

    pub fn with_reflect_percent(mut self, reflect_percent: u32) -> Self {
        self.reflect_percent = reflect_percent;
        self
    }

    pub fn with_resurrection_percent(mut self, resurrection_percent: u32) -> Self {
        self.resurrection_percent = resurrection_percent;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
