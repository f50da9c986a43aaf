//! Session orchestrator.
//!
//! A [`Session`] owns the game state, the item catalog and the event bus.
//! Every input goes through [`Session::execute`]: the action is applied,
//! events are extracted from its outcome and published to observers.

use satchel_core::{
    Action, BeginDragAction, ClearSelectionAction, ClosePanelAction, Contact,
    DestroySelectedAction, DropAction, EndDragAction, EntityId, EntryId, GameConfig, GameEnv,
    GameState, ItemOracle, OpenPanelAction, PickUpAction, SelectAction, SlotIndex,
    UseSelectedAction,
};

use crate::api::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent, extract_events};
use crate::handlers::EventHandler;
use crate::oracle::ItemCatalog;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
}

impl RuntimeConfig {
    pub fn new(game_config: GameConfig) -> Self {
        Self { game_config }
    }
}

/// Single-player inventory session.
#[derive(Debug)]
pub struct Session {
    config: RuntimeConfig,
    state: GameState,
    items: ItemCatalog,
    bus: EventBus,
}

impl Session {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    /// Event bus for registering observers after the session is built.
    pub fn events(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Applies an action, publishes the resulting events, and returns them.
    pub fn execute(&mut self, action: impl Into<Action>) -> Vec<GameEvent> {
        let action = action.into();
        let env = GameEnv::new(&self.items);
        let outcome = action.apply(&mut self.state, &env);
        tracing::debug!(action = action.as_snake_case(), ?outcome, "action applied");

        let events = extract_events(&outcome, &self.state);
        self.bus.publish_all(&events);
        events
    }

    /// Places a new pickable for the catalog item `id` in the world.
    pub fn spawn_world_item(&mut self, id: &str) -> Result<EntityId> {
        let handle = self.items.resolve(id)?;
        let entity = self.state.world.spawn(handle);
        tracing::debug!(%entity, id, "world item spawned");
        Ok(entity)
    }

    // ========================================================================
    // Input entry points
    // ========================================================================

    /// Pickup trigger from the collision system.
    pub fn pick_up(&mut self, item: EntityId, contact: Contact) -> Result<Vec<GameEvent>> {
        if contact == Contact::Player && self.state.world.get(item).is_none() {
            return Err(RuntimeError::UnknownWorldItem(item));
        }
        Ok(self.execute(PickUpAction::new(item, contact)))
    }

    pub fn select(&mut self, entry: EntryId) -> Vec<GameEvent> {
        self.execute(SelectAction::new(entry))
    }

    pub fn clear_selection(&mut self) -> Vec<GameEvent> {
        self.execute(ClearSelectionAction)
    }

    pub fn use_selected(&mut self) -> Vec<GameEvent> {
        self.execute(UseSelectedAction)
    }

    pub fn destroy_selected(&mut self) -> Vec<GameEvent> {
        self.execute(DestroySelectedAction)
    }

    pub fn begin_drag(&mut self, entry: EntryId) -> Vec<GameEvent> {
        self.execute(BeginDragAction::new(entry))
    }

    pub fn drop_on(&mut self, entry: EntryId, target: SlotIndex) -> Vec<GameEvent> {
        self.execute(DropAction::new(entry, target))
    }

    pub fn end_drag(&mut self, entry: EntryId) -> Vec<GameEvent> {
        self.execute(EndDragAction::new(entry))
    }

    /// Full drag gesture: begin, drop onto `target`, end.
    pub fn drag(&mut self, entry: EntryId, target: SlotIndex) -> Vec<GameEvent> {
        let mut events = self.begin_drag(entry);
        events.extend(self.drop_on(entry, target));
        events.extend(self.end_drag(entry));
        events
    }

    pub fn open_panel(&mut self) -> Vec<GameEvent> {
        self.execute(OpenPanelAction)
    }

    pub fn close_panel(&mut self) -> Vec<GameEvent> {
        self.execute(ClosePanelAction)
    }

    /// Display name of a displayed entry.
    pub fn entry_name(&self, entry: EntryId) -> Option<&str> {
        let handle = self.state.panel.entry(entry)?.handle;
        self.items.definition(handle).map(|def| def.name.as_str())
    }
}

/// Builder for [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    config: RuntimeConfig,
    catalog: Option<ItemCatalog>,
    world_items: Vec<String>,
    bus: EventBus,
}

impl SessionBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required item catalog
    pub fn catalog(mut self, catalog: ItemCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Items placed in the world at start, by catalog id.
    pub fn world_items<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.world_items.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Register an observer before the first event can fire.
    pub fn handler(mut self, handler: impl EventHandler + 'static) -> Self {
        self.bus.register(handler);
        self
    }

    /// Build the session
    pub fn build(self) -> Result<Session> {
        let items = self.catalog.ok_or(RuntimeError::MissingCatalog)?;
        let state = GameState::new(&self.config.game_config)?;

        let mut session = Session {
            config: self.config,
            state,
            items,
            bus: self.bus,
        };
        for id in &self.world_items {
            session.spawn_world_item(id)?;
        }

        tracing::info!(
            capacity = session.state.inventory.capacity(),
            slots = session.state.panel.slots().len(),
            max_health = session.state.health.max(),
            world_items = session.state.world.len(),
            "session started"
        );
        Ok(session)
    }
}
