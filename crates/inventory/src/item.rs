use serde::{Deserialize, Serialize};

use lootbag_core::{DomainError, DomainResult, ValueObject};

/// Maximum length of an item name, in characters.
pub const NAME_MAX_CHARS: usize = 29;

/// Maximum length of an item category, in characters.
pub const CATEGORY_MAX_CHARS: usize = 19;

/// A piece of loot: name, free-form category (weapon, ammo, heal, tool...) and quantity.
///
/// Names are not unique. Quantity is whatever the player entered, negatives included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    name: String,
    category: String,
    quantity: i32,
}

impl ValueObject for Item {}

impl Item {
    /// Build a validated item.
    ///
    /// Rejects a blank name and fields longer than [`NAME_MAX_CHARS`] /
    /// [`CATEGORY_MAX_CHARS`]. Nothing is truncated here.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(DomainError::too_long("name", NAME_MAX_CHARS));
        }
        if category.chars().count() > CATEGORY_MAX_CHARS {
            return Err(DomainError::too_long("category", CATEGORY_MAX_CHARS));
        }

        Ok(Self {
            name,
            category,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// ASCII case-insensitive comparison against the full name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Unvalidated wire shape; deserialization goes through [`Item::new`].
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    category: String,
    quantity: i32,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(value: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(value.name, value.category, value.quantity)
    }
}
