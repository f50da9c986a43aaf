//! Inventory panel model: displayed items, slots, selection and HUD text.
//!
//! This is the presentation state the UI layer renders from. It never
//! touches the [`crate::Inventory`]; actions keep the two in sync.

use crate::error::ConfigError;
use crate::state::{
    EntryId, ItemHandle, PlayerHealth, SelectionChange, SelectionController, SlotGrid, SlotIndex,
};

/// An item shown in the panel.
///
/// `slot` is `None` while the item is being dragged; `drag_origin` remembers
/// where the drag started so an unaccepted drag can be undone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayedItem {
    pub id: EntryId,
    pub handle: ItemHandle,
    slot: Option<SlotIndex>,
    drag_origin: Option<SlotIndex>,
}

impl DisplayedItem {
    pub fn slot(&self) -> Option<SlotIndex> {
        self.slot
    }

    pub fn is_dragging(&self) -> bool {
        self.slot.is_none()
    }

    /// Slot the current drag started from.
    pub fn drag_origin(&self) -> Option<SlotIndex> {
        self.drag_origin
    }
}

/// The small panel showing the selected item's name and the use/destroy buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionPanel {
    item_name: Option<String>,
}

impl InteractionPanel {
    pub fn is_visible(&self) -> bool {
        self.item_name.is_some()
    }

    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }
}

/// Result of showing a newly added item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayOutcome {
    Displayed { entry: EntryId, slot: SlotIndex },
    /// Every slot is taken; the item stays in the inventory without a visual.
    NoFreeSlot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryPanel {
    slots: SlotGrid,
    entries: Vec<DisplayedItem>,
    selection: SelectionController,
    interaction: InteractionPanel,
    open: bool,
    hp_text: String,
    next_entry: u32,
}

impl InventoryPanel {
    /// Creates a closed panel with `slot_count` empty slots.
    pub fn new(slot_count: usize, health: &PlayerHealth) -> Result<Self, ConfigError> {
        Ok(Self {
            slots: SlotGrid::new(slot_count)?,
            entries: Vec::new(),
            selection: SelectionController::new(),
            interaction: InteractionPanel::default(),
            open: false,
            hp_text: health.to_string(),
            next_entry: 0,
        })
    }

    // ========================================================================
    // Open / close
    // ========================================================================

    pub fn open(&mut self, health: &PlayerHealth) {
        self.open = true;
        self.refresh_health(health);
    }

    /// Hides the panel, dropping any selection.
    pub fn close(&mut self) -> SelectionChange {
        self.open = false;
        self.clear_selection()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Shows `handle` in the first free slot.
    pub fn display(&mut self, handle: ItemHandle) -> DisplayOutcome {
        let Some(slot) = self.slots.first_free_slot() else {
            tracing::warn!(%handle, "no free slot to display item");
            return DisplayOutcome::NoFreeSlot;
        };

        let entry = EntryId(self.next_entry);
        self.next_entry = self.next_entry.wrapping_add(1);
        self.slots.fill(slot, entry);
        self.entries.push(DisplayedItem {
            id: entry,
            handle,
            slot: Some(slot),
            drag_origin: None,
        });

        DisplayOutcome::Displayed { entry, slot }
    }

    pub fn entry(&self, entry: EntryId) -> Option<&DisplayedItem> {
        self.entries.iter().find(|item| item.id == entry)
    }

    pub fn entries(&self) -> &[DisplayedItem] {
        &self.entries
    }

    /// Entry displayed in `slot`, if any.
    pub fn entry_in(&self, slot: SlotIndex) -> Option<&DisplayedItem> {
        let occupant = self.slots.get(slot)?.occupant()?;
        self.entry(occupant)
    }

    pub fn slots(&self) -> &SlotGrid {
        &self.slots
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Selects a displayed entry and shows `name` in the interaction panel.
    ///
    /// Returns `None`, changing nothing, if the entry is not displayed.
    pub fn select(&mut self, entry: EntryId, name: impl Into<String>) -> Option<SelectionChange> {
        self.entry(entry)?;
        let change = self.selection.select(entry, &mut self.slots);
        self.interaction.item_name = Some(name.into());
        Some(change)
    }

    /// Drops the selection and hides the interaction panel.
    pub fn clear_selection(&mut self) -> SelectionChange {
        self.interaction.item_name = None;
        self.selection.clear(&mut self.slots)
    }

    pub fn selected(&self) -> Option<&DisplayedItem> {
        self.entry(self.selection.selected()?)
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn interaction(&self) -> &InteractionPanel {
        &self.interaction
    }

    /// Removes the selected entry from its slot and from the display.
    pub fn remove_selected(&mut self) -> Option<DisplayedItem> {
        let entry = self.selection.selected()?;
        self.clear_selection();

        let index = self.entries.iter().position(|item| item.id == entry)?;
        let removed = self.entries.remove(index);
        if let Some(slot) = removed.slot {
            self.slots.empty(slot);
        }
        Some(removed)
    }

    // ========================================================================
    // Drag and drop
    // ========================================================================

    /// Lifts an entry out of its slot. Clears the selection.
    ///
    /// Returns the slot the entry left, or `None` if it is unknown or already
    /// being dragged.
    pub fn begin_drag(&mut self, entry: EntryId) -> Option<SlotIndex> {
        let origin = self.entry(entry)?.slot?;
        self.clear_selection();
        self.slots.empty(origin);

        let item = self.entry_mut(entry)?;
        item.slot = None;
        item.drag_origin = Some(origin);
        Some(origin)
    }

    /// Places a dragged entry onto `target` if that slot holds nothing.
    pub fn drop_on(&mut self, entry: EntryId, target: SlotIndex) -> bool {
        let dragging = self.entry(entry).is_some_and(DisplayedItem::is_dragging);
        if !dragging || !self.slots.accepts_drop(target) {
            return false;
        }

        self.place(entry, target);
        true
    }

    /// Finishes a drag. An entry that was not dropped anywhere goes back to
    /// where it came from, or to the first free slot if that one was taken
    /// in the meantime.
    ///
    /// Returns the slot the entry ends up in.
    pub fn end_drag(&mut self, entry: EntryId) -> Option<SlotIndex> {
        let item = self.entry(entry)?;
        if let Some(slot) = item.slot {
            return Some(slot);
        }

        let target = item
            .drag_origin
            .filter(|origin| self.slots.accepts_drop(*origin))
            .or_else(|| self.slots.first_free_slot());
        let Some(target) = target else {
            tracing::warn!(%entry, "no slot left to return dragged item to");
            return None;
        };

        self.place(entry, target);
        Some(target)
    }

    /// Settles a dragged entry into `target`. An entry selected while it was
    /// in flight gets its highlight on arrival.
    fn place(&mut self, entry: EntryId, target: SlotIndex) {
        self.slots.fill(target, entry);
        if self.selection.is_selected(entry) {
            self.slots.set_active(target);
        }
        if let Some(item) = self.entry_mut(entry) {
            item.slot = Some(target);
            item.drag_origin = None;
        }
    }

    // ========================================================================
    // Health HUD
    // ========================================================================

    pub fn refresh_health(&mut self, health: &PlayerHealth) {
        self.hp_text = health.to_string();
    }

    pub fn hp_text(&self) -> &str {
        &self.hp_text
    }

    fn entry_mut(&mut self, entry: EntryId) -> Option<&mut DisplayedItem> {
        self.entries.iter_mut().find(|item| item.id == entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SlotVisual;

    const POTION: ItemHandle = ItemHandle(1);
    const POISON: ItemHandle = ItemHandle(2);

    fn panel(slots: usize) -> InventoryPanel {
        InventoryPanel::new(slots, &PlayerHealth::new(100)).unwrap()
    }

    fn displayed(outcome: DisplayOutcome) -> (EntryId, SlotIndex) {
        match outcome {
            DisplayOutcome::Displayed { entry, slot } => (entry, slot),
            DisplayOutcome::NoFreeSlot => panic!("expected a free slot"),
        }
    }

    #[test]
    fn display_fills_first_free_slot() {
        let mut panel = panel(2);

        let (first, slot) = displayed(panel.display(POTION));
        assert_eq!(slot, SlotIndex(0));
        let (second, slot) = displayed(panel.display(POISON));
        assert_eq!(slot, SlotIndex(1));
        assert_ne!(first, second);

        assert_eq!(panel.display(POTION), DisplayOutcome::NoFreeSlot);
        assert_eq!(panel.entries().len(), 2);
    }

    #[test]
    fn select_shows_name_and_highlights_slot() {
        let mut panel = panel(2);
        let (entry, slot) = displayed(panel.display(POTION));

        let change = panel.select(entry, "Healing Potion").unwrap();
        assert_eq!(change.current, Some(entry));
        assert_eq!(panel.interaction().item_name(), Some("Healing Potion"));
        assert_eq!(panel.slots().get(slot).unwrap().visual(), SlotVisual::Active);
    }

    #[test]
    fn select_unknown_entry_is_noop() {
        let mut panel = panel(2);
        assert_eq!(panel.select(EntryId(42), "Ghost"), None);
        assert!(!panel.interaction().is_visible());
    }

    #[test]
    fn close_clears_selection() {
        let mut panel = panel(2);
        let health = PlayerHealth::new(100);
        panel.open(&health);
        let (entry, _) = displayed(panel.display(POTION));
        panel.select(entry, "Healing Potion");

        let change = panel.close();
        assert_eq!(change.previous, Some(entry));
        assert!(!panel.is_open());
        assert!(panel.selected().is_none());
        assert!(!panel.interaction().is_visible());
    }

    #[test]
    fn remove_selected_vacates_slot() {
        let mut panel = panel(2);
        let (entry, slot) = displayed(panel.display(POTION));
        panel.select(entry, "Healing Potion");

        let removed = panel.remove_selected().unwrap();
        assert_eq!(removed.id, entry);
        assert!(!panel.slots().get(slot).unwrap().is_occupied());
        assert_eq!(panel.slots().get(slot).unwrap().visual(), SlotVisual::Inactive);
        assert!(panel.entries().is_empty());
        assert!(panel.remove_selected().is_none());
    }

    #[test]
    fn drop_onto_empty_slot_moves_entry() {
        let mut panel = panel(3);
        let (entry, origin) = displayed(panel.display(POTION));

        assert_eq!(panel.begin_drag(entry), Some(origin));
        assert!(panel.drop_on(entry, SlotIndex(2)));
        assert_eq!(panel.end_drag(entry), Some(SlotIndex(2)));

        assert!(!panel.slots().get(origin).unwrap().is_occupied());
        assert_eq!(panel.entry_in(SlotIndex(2)).map(|item| item.id), Some(entry));
    }

    #[test]
    fn rejected_drop_returns_entry_to_origin() {
        let mut panel = panel(2);
        let (first, origin) = displayed(panel.display(POTION));
        let (_, taken) = displayed(panel.display(POISON));

        panel.begin_drag(first);
        assert!(!panel.drop_on(first, taken));
        assert_eq!(panel.end_drag(first), Some(origin));

        assert!(panel.slots().get(origin).unwrap().is_occupied());
        assert_eq!(panel.slots().first_free_slot(), None);
    }

    #[test]
    fn begin_drag_clears_selection() {
        let mut panel = panel(2);
        let (entry, slot) = displayed(panel.display(POTION));
        panel.select(entry, "Healing Potion");

        panel.begin_drag(entry);
        assert!(panel.selected().is_none());
        assert_eq!(panel.slots().get(slot).unwrap().visual(), SlotVisual::Inactive);
        assert_eq!(panel.begin_drag(entry), None);
    }

    #[test]
    fn entry_selected_mid_drag_is_highlighted_where_it_lands() {
        let mut panel = panel(3);
        let (entry, origin) = displayed(panel.display(POTION));

        panel.begin_drag(entry);
        panel.select(entry, "Healing Potion");
        assert!(panel.drop_on(entry, SlotIndex(2)));
        panel.end_drag(entry);

        assert!(panel.selection().is_selected(entry));
        assert_eq!(panel.slots().get(SlotIndex(2)).unwrap().visual(), SlotVisual::Active);
        assert_eq!(panel.slots().get(origin).unwrap().visual(), SlotVisual::Inactive);
    }

    #[test]
    fn entry_selected_mid_drag_is_highlighted_when_returned() {
        let mut panel = panel(2);
        let (entry, origin) = displayed(panel.display(POTION));

        panel.begin_drag(entry);
        panel.select(entry, "Healing Potion");
        assert_eq!(panel.end_drag(entry), Some(origin));

        assert_eq!(panel.slots().get(origin).unwrap().visual(), SlotVisual::Active);
    }

    #[test]
    fn entry_ids_wrap_instead_of_overflowing() {
        let mut panel = panel(2);
        panel.next_entry = u32::MAX;

        let (last, _) = displayed(panel.display(POTION));
        let (wrapped, _) = displayed(panel.display(POISON));
        assert_eq!(last, EntryId(u32::MAX));
        assert_eq!(wrapped, EntryId(0));
    }

    #[test]
    fn open_refreshes_hp_text() {
        let mut panel = panel(1);
        panel.open(&PlayerHealth::with_current(40, 100));
        assert_eq!(panel.hp_text(), "HP: 40 / 100");
    }
}
