//! Loot inventory domain module.
//!
//! A bounded, insertion-ordered backpack of items with name lookup and
//! order-preserving removal. Pure domain logic (no IO).

pub mod backpack;
pub mod item;

pub use backpack::{
    CollectItem, DEFAULT_CAPACITY, DiscardItem, Inventory, InventoryCommand, InventoryEvent,
    ItemCollected, ItemDiscarded,
};
pub use item::{CATEGORY_MAX_CHARS, Item, NAME_MAX_CHARS};
