//! Player health model.

use core::fmt;

/// Current and maximum health of the player.
///
/// # Invariants
///
/// - `0 <= current <= max`; both heal and damage clamp into this range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerHealth {
    current: u32,
    max: u32,
}

impl PlayerHealth {
    /// Creates a health pool at its maximum.
    pub const fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Creates a health pool with an explicit current value, clamped to `max`.
    pub fn with_current(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.current == self.max
    }

    #[inline]
    pub const fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Restores health, never above `max`.
    pub fn heal(&mut self, amount: u32) -> HealthChange {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.change_from(before)
    }

    /// Removes health, never below zero.
    pub fn take_damage(&mut self, amount: u32) -> HealthChange {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        self.change_from(before)
    }

    fn change_from(&self, before: u32) -> HealthChange {
        HealthChange {
            before,
            after: self.current,
            max: self.max,
        }
    }
}

/// HUD text, e.g. `HP: 80 / 100`.
impl fmt::Display for PlayerHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HP: {} / {}", self.current, self.max)
    }
}

/// A single health transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthChange {
    pub before: u32,
    pub after: u32,
    pub max: u32,
}

impl HealthChange {
    /// True only for the transition that crosses from alive to zero.
    pub const fn died(&self) -> bool {
        self.before > 0 && self.after == 0
    }

    pub const fn delta(&self) -> i64 {
        self.after as i64 - self.before as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_full() {
        let health = PlayerHealth::new(100);
        assert!(health.is_full());
        assert!(!health.is_dead());
        assert_eq!(health.to_string(), "HP: 100 / 100");
    }

    #[test]
    fn heal_increases_by_missing_amount_at_most() {
        let mut health = PlayerHealth::with_current(80, 100);

        let change = health.heal(30);
        assert_eq!(change.before, 80);
        assert_eq!(change.after, 100);
        assert_eq!(change.delta(), 20);

        let mut health = PlayerHealth::with_current(50, 100);
        health.heal(10);
        assert_eq!(health.current(), 60);
    }

    #[test]
    fn damage_clamps_at_zero_and_signals_death() {
        let mut health = PlayerHealth::with_current(10, 100);

        let change = health.take_damage(15);
        assert_eq!(health.current(), 0);
        assert!(change.died());
        assert!(health.is_dead());
    }

    #[test]
    fn death_signaled_once_per_crossing() {
        let mut health = PlayerHealth::with_current(5, 100);

        assert!(health.take_damage(5).died());
        assert!(!health.take_damage(5).died());

        health.heal(1);
        assert!(health.take_damage(u32::MAX).died());
    }

    #[test]
    fn explicit_current_is_clamped() {
        let health = PlayerHealth::with_current(500, 100);
        assert_eq!(health.current(), 100);
    }
}
