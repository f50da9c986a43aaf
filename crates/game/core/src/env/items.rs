use crate::state::{HealthChange, ItemHandle, PlayerHealth};

pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;

    /// Looks up a definition by its string id (e.g. `"healing_potion"`).
    fn find(&self, id: &str) -> Option<&ItemDefinition>;

    /// Returns every handle known to this oracle, in ascending order.
    fn handles(&self) -> Vec<ItemHandle>;
}

/// Opaque reference to an engine asset (sprite, material).
///
/// The core never resolves these; the rendering layer does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetKey(pub String);

impl AssetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle, id, name, asset keys)
/// - `kind` enum holds type-specific data (heal amount, damage amount, etc.)
///
/// Definitions are immutable once loaded. Inventories and the panel hold
/// [`ItemHandle`]s and resolve them through an [`ItemOracle`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: AssetKey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub material: AssetKey,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(
        handle: ItemHandle,
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            handle,
            id: id.into(),
            name: name.into(),
            sprite: AssetKey::default(),
            material: AssetKey::default(),
            kind,
        }
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = AssetKey::new(sprite);
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = AssetKey::new(material);
        self
    }

    /// Returns the consumable effect bound to this item's kind, if any.
    pub fn consumable(&self) -> Option<ConsumableEffect> {
        match self.kind {
            ItemKind::Potion(data) => Some(ConsumableEffect::Heal(data.amount_to_heal)),
            ItemKind::Poison(data) => Some(ConsumableEffect::Damage(data.amount_to_damage)),
            ItemKind::Weapon(_) | ItemKind::Key { .. } | ItemKind::Misc => None,
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Restores health when consumed.
    Potion(PotionData),

    /// Deals damage to whoever consumes it.
    Poison(PoisonData),

    /// Carried weapon. Not consumable.
    Weapon(WeaponData),

    /// Key for unlocking doors/chests.
    Key { door_id: u16 },

    /// Anything else the player can carry.
    Misc,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            Self::Potion(_) => ItemCategory::Potion,
            Self::Poison(_) => ItemCategory::Poison,
            Self::Weapon(_) => ItemCategory::Weapon,
            Self::Key { .. } => ItemCategory::Key,
            Self::Misc => ItemCategory::Misc,
        }
    }
}

/// Payload-free tag of [`ItemKind`], used for display and text commands.
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
pub enum ItemCategory {
    Potion,
    Poison,
    Weapon,
    Key,
    Misc,
}

/// Healing potion data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionData {
    pub amount_to_heal: u32,
}

/// Poison data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoisonData {
    pub amount_to_damage: u32,
}

/// Weapon data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage: u32,
}

/// Effect applied to the player when an item is consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    /// Restore health. Refused when the player is already at full health.
    Heal(u32),

    /// Deal damage. Always consumed.
    Damage(u32),
}

impl ConsumableEffect {
    /// Applies the effect and reports whether the item was used up.
    pub fn apply(self, health: &mut PlayerHealth) -> EffectOutcome {
        match self {
            Self::Heal(amount) => {
                if health.is_full() {
                    return EffectOutcome::refused();
                }
                EffectOutcome::consumed(health.heal(amount))
            }
            Self::Damage(amount) => EffectOutcome::consumed(health.take_damage(amount)),
        }
    }
}

/// Result of applying a [`ConsumableEffect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectOutcome {
    pub consumed: bool,
    /// Health transition, present whenever health was touched.
    pub change: Option<HealthChange>,
}

impl EffectOutcome {
    fn consumed(change: HealthChange) -> Self {
        Self {
            consumed: true,
            change: Some(change),
        }
    }

    fn refused() -> Self {
        Self {
            consumed: false,
            change: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potion(amount: u32) -> ItemDefinition {
        ItemDefinition::new(
            ItemHandle(1),
            "healing_potion",
            "Healing Potion",
            ItemKind::Potion(PotionData {
                amount_to_heal: amount,
            }),
        )
    }

    #[test]
    fn heal_at_full_health_is_refused() {
        let mut health = PlayerHealth::new(100);
        let outcome = ConsumableEffect::Heal(10).apply(&mut health);

        assert!(!outcome.consumed);
        assert_eq!(outcome.change, None);
        assert_eq!(health.current(), 100);
    }

    #[test]
    fn heal_below_max_is_clamped() {
        let mut health = PlayerHealth::with_current(80, 100);

        let first = ConsumableEffect::Heal(30).apply(&mut health);
        assert!(first.consumed);
        assert_eq!(health.current(), 100);

        let second = ConsumableEffect::Heal(10).apply(&mut health);
        assert!(!second.consumed);
        assert_eq!(health.current(), 100);
    }

    #[test]
    fn damage_is_always_consumed() {
        let mut health = PlayerHealth::with_current(10, 100);
        let outcome = ConsumableEffect::Damage(15).apply(&mut health);

        assert!(outcome.consumed);
        let change = outcome.change.expect("damage always touches health");
        assert!(change.died());
        assert_eq!(health.current(), 0);
    }

    #[test]
    fn only_potions_and_poisons_are_consumable() {
        assert_eq!(potion(25).consumable(), Some(ConsumableEffect::Heal(25)));

        let sword = ItemDefinition::new(
            ItemHandle(2),
            "sword",
            "Sword",
            ItemKind::Weapon(WeaponData { damage: 7 }),
        );
        assert_eq!(sword.consumable(), None);
        assert_eq!(sword.category(), ItemCategory::Weapon);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("POTION".parse::<ItemCategory>(), Ok(ItemCategory::Potion));
        assert_eq!(ItemCategory::Key.to_string(), "key");
    }
}
