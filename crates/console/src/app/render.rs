//! Text rendering for the menu, listings, and item details.

use std::io::{self, Write};

use lootbag_inventory::{Inventory, Item};

use super::menu::MenuChoice;

const RULE: &str = "---------------------------------";

pub fn menu(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Loot Inventory (Backpack) ---")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.code(), choice.label())?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Items in backpack: {}/{}",
        inventory.len(),
        inventory.capacity()
    )?;
    Ok(())
}

pub fn listing(out: &mut impl Write, items: &[Item]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Items in Backpack ---")?;
    if items.is_empty() {
        writeln!(out, "The backpack is empty. Collect some loot!")?;
    }
    for (slot, item) in items.iter().enumerate() {
        writeln!(
            out,
            "  [{}] Name: {}, Category: {}, Quantity: {}",
            slot + 1,
            item.name(),
            item.category(),
            item.quantity()
        )?;
    }
    writeln!(out, "{RULE}")
}

pub fn item_details(out: &mut impl Write, query: &str, item: &Item) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Item '{query}' found in the backpack!")?;
    writeln!(out, "Details:")?;
    writeln!(out, "  -> Name: {}", item.name())?;
    writeln!(out, "  -> Category: {}", item.category())?;
    writeln!(out, "  -> Quantity: {}", item.quantity())
}
