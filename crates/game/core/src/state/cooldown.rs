//! Special ability cooldown bookkeeping.

/// Readiness of a combatant's special ability.
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
pub enum AbilityStatus {
    Ready,
    Cooldown,
}

/// Remaining turns before a special ability can be used again.
///
/// The status is derived from `remaining`, so a READY ability always has zero
/// turns left and a cooling ability always has at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldown {
    remaining: u32,
    length: u32,
}

impl Cooldown {
    /// Creates a ready cooldown with the given full length.
    pub const fn new(length: u32) -> Self {
        Self {
            remaining: 0,
            length,
        }
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn length(&self) -> u32 {
        self.length
    }

    pub const fn status(&self) -> AbilityStatus {
        if self.remaining == 0 {
            AbilityStatus::Ready
        } else {
            AbilityStatus::Cooldown
        }
    }

    pub const fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Starts the full cooldown. A zero-length cooldown stays READY.
    pub fn reset(&mut self) {
        self.remaining = self.length;
    }

    /// Advances the cooldown by one turn.
    ///
    /// Returns true when this tick brought the ability back to READY.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_then_tick_back_to_ready() {
        let mut cooldown = Cooldown::new(3);
        assert!(cooldown.is_ready());

        cooldown.reset();
        assert_eq!(cooldown.status(), AbilityStatus::Cooldown);
        assert_eq!(cooldown.remaining(), 3);

        assert!(!cooldown.tick());
        assert!(!cooldown.tick());
        assert!(cooldown.tick());
        assert_eq!(cooldown.status(), AbilityStatus::Ready);

        // Ticking a ready ability is a no-op.
        assert!(!cooldown.tick());
        assert_eq!(cooldown.remaining(), 0);
    }

    #[test]
    fn zero_length_cooldown_never_leaves_ready() {
        let mut cooldown = Cooldown::new(0);
        cooldown.reset();
        assert!(cooldown.is_ready());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("READY".parse::<AbilityStatus>().ok(), Some(AbilityStatus::Ready));
        assert_eq!(AbilityStatus::Cooldown.to_string(), "cooldown");
    }
}
