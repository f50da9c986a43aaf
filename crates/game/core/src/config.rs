use crate::error::ConfigError;

/// Inventory configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Maximum number of items the player can carry.
    pub inventory_capacity: usize,
    /// Number of slots in the inventory panel.
    pub slot_count: usize,
    /// Maximum player health. The player spawns at this value.
    pub max_health: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_CAPACITY: usize = 32;
    pub const MAX_SLOTS: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CAPACITY: usize = 8;
    pub const DEFAULT_SLOT_COUNT: usize = 8;
    pub const DEFAULT_MAX_HEALTH: u32 = 100;

    pub fn new() -> Self {
        Self {
            inventory_capacity: Self::DEFAULT_CAPACITY,
            slot_count: Self::DEFAULT_SLOT_COUNT,
            max_health: Self::DEFAULT_MAX_HEALTH,
        }
    }

    pub fn with_capacity(mut self, inventory_capacity: usize) -> Self {
        self.inventory_capacity = inventory_capacity;
        self
    }

    pub fn with_slot_count(mut self, slot_count: usize) -> Self {
        self.slot_count = slot_count;
        self
    }

    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Checks every field against its supported range.
    ///
    /// A slot count smaller than the capacity is allowed: items beyond the
    /// visible slots stay in the inventory without a visual.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory_capacity == 0 || self.inventory_capacity > Self::MAX_CAPACITY {
            return Err(ConfigError::CapacityOutOfRange {
                value: self.inventory_capacity,
                max: Self::MAX_CAPACITY,
            });
        }
        if self.slot_count == 0 || self.slot_count > Self::MAX_SLOTS {
            return Err(ConfigError::SlotCountOutOfRange {
                value: self.slot_count,
                max: Self::MAX_SLOTS,
            });
        }
        if self.max_health == 0 {
            return Err(ConfigError::ZeroMaxHealth);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let zero_capacity = GameConfig::new().with_capacity(0);
        assert!(matches!(
            zero_capacity.validate(),
            Err(ConfigError::CapacityOutOfRange { value: 0, .. })
        ));

        let too_many_slots = GameConfig::new().with_slot_count(GameConfig::MAX_SLOTS + 1);
        assert!(matches!(
            too_many_slots.validate(),
            Err(ConfigError::SlotCountOutOfRange { .. })
        ));

        let dead_on_arrival = GameConfig::new().with_max_health(0);
        assert_eq!(dead_on_arrival.validate(), Err(ConfigError::ZeroMaxHealth));
    }

    #[test]
    fn fewer_slots_than_capacity_is_allowed() {
        let config = GameConfig::new().with_capacity(10).with_slot_count(4);
        assert_eq!(config.validate(), Ok(()));
    }
}
