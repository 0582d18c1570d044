use serde::{Deserialize, Serialize};

use lootbag_core::{Aggregate, DomainError, DomainResult};

use crate::item::Item;

/// Capacity used by [`Inventory::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Aggregate root: Inventory (the player's backpack).
///
/// Items live in insertion order in slots `0..len()`, with no gaps. The
/// capacity is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
    version: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Empty inventory with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            version: 0,
        }
    }

    /// Empty inventory with `capacity` slots. Zero is rejected.
    pub fn with_capacity(capacity: usize) -> DomainResult<Self> {
        if capacity == 0 {
            return Err(DomainError::validation("capacity must be at least 1"));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            version: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Append `item` at the end and return its slot index.
    pub fn insert(&mut self, item: Item) -> DomainResult<usize> {
        let event = self.decide_collect(item)?;
        let index = event.index;
        self.apply(&InventoryEvent::ItemCollected(event));
        Ok(index)
    }

    /// Index of the first item whose name matches (ASCII case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.has_name(name))
    }

    /// First item whose name matches, with its slot index.
    pub fn find_by_name(&self, name: &str) -> DomainResult<(usize, &Item)> {
        if self.items.is_empty() {
            return Err(DomainError::Empty);
        }
        let index = self.position(name).ok_or(DomainError::NotFound)?;
        Ok((index, &self.items[index]))
    }

    /// Remove the first item whose name matches and close the gap.
    ///
    /// Returns the removed item and the slot it occupied.
    pub fn remove_by_name(&mut self, name: &str) -> DomainResult<(usize, Item)> {
        let event = self.decide_discard(name)?;
        let index = event.index;
        let item = event.item.clone();
        self.apply(&InventoryEvent::ItemDiscarded(event));
        Ok((index, item))
    }

    /// Read-only view of all items, slot 0 first.
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    fn decide_collect(&self, item: Item) -> DomainResult<ItemCollected> {
        if self.is_full() {
            return Err(DomainError::full(self.capacity));
        }
        Ok(ItemCollected {
            index: self.items.len(),
            item,
        })
    }

    fn decide_discard(&self, name: &str) -> DomainResult<ItemDiscarded> {
        let (index, item) = self.find_by_name(name)?;
        Ok(ItemDiscarded {
            index,
            item: item.clone(),
        })
    }
}

/// Command: CollectItem (append to the backpack).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectItem {
    pub item: Item,
}

/// Command: DiscardItem (remove the first item with this name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardItem {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    CollectItem(CollectItem),
    DiscardItem(DiscardItem),
}

/// Event: ItemCollected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCollected {
    pub index: usize,
    pub item: Item,
}

/// Event: ItemDiscarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDiscarded {
    pub index: usize,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemCollected(ItemCollected),
    ItemDiscarded(ItemDiscarded),
}

impl InventoryEvent {
    /// Stable event name.
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemCollected(_) => "inventory.item.collected",
            InventoryEvent::ItemDiscarded(_) => "inventory.item.discarded",
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    /// Events that do not fit the current state are ignored and leave
    /// `version()` unchanged: an `ItemCollected` on a full backpack or off the
    /// append slot, or an `ItemDiscarded` whose slot no longer holds its item.
    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemCollected(e) => {
                if self.is_full() || e.index != self.items.len() {
                    return;
                }
                self.items.push(e.item.clone());
            }
            InventoryEvent::ItemDiscarded(e) => {
                if self.items.get(e.index) != Some(&e.item) {
                    return;
                }
                // Shifts every later item one slot left.
                self.items.remove(e.index);
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::CollectItem(cmd) => Ok(vec![InventoryEvent::ItemCollected(
                self.decide_collect(cmd.item.clone())?,
            )]),
            InventoryCommand::DiscardItem(cmd) => Ok(vec![InventoryEvent::ItemDiscarded(
                self.decide_discard(&cmd.name)?,
            )]),
        }
    }
}
