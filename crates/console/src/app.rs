//! Console controller: menu loop driving the inventory.

mod errors;
mod menu;
mod render;

use std::io::{BufRead, Write};

use lootbag_core::{Aggregate, DomainError, DomainResult};
use lootbag_inventory::{
    CATEGORY_MAX_CHARS, CollectItem, DiscardItem, Inventory, InventoryCommand, InventoryEvent,
    Item, NAME_MAX_CHARS,
};

use crate::config::ConsoleConfig;
use crate::prompt::{PromptError, Prompter};

pub use errors::{Action, domain_error_message};
pub use menu::MenuChoice;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a single inventory.
pub struct Console<R, W> {
    inventory: Inventory,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(config: &ConsoleConfig, input: R, output: W) -> DomainResult<Self> {
        Ok(Self {
            inventory: Inventory::with_capacity(config.capacity)?,
            prompter: Prompter::new(input, output),
        })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.prompter.into_output())
    }

    /// Run the menu loop until Quit or end of input.
    pub fn run(&mut self) -> Result<(), PromptError> {
        tracing::info!(capacity = self.inventory.capacity(), "session started");
        writeln!(self.prompter.output(), "Starting the loot inventory...")?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(PromptError::Closed) => {
                    tracing::info!("input closed");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(items = self.inventory.len(), "session ended");
        Ok(())
    }

    fn step(&mut self) -> Result<Flow, PromptError> {
        render::menu(self.prompter.output(), &self.inventory)?;
        let answer = self.prompter.ask("Choose an option: ")?;

        match MenuChoice::parse(&answer) {
            Some(MenuChoice::Collect) => self.collect()?,
            Some(MenuChoice::Discard) => self.discard()?,
            Some(MenuChoice::Find) => self.find()?,
            Some(MenuChoice::Quit) => {
                writeln!(self.prompter.output())?;
                writeln!(self.prompter.output(), "Game over. Thanks for using the inventory!")?;
                return Ok(Flow::Quit);
            }
            None => {
                tracing::debug!(input = %answer, "invalid menu option");
                writeln!(self.prompter.output())?;
                writeln!(self.prompter.output(), "Invalid option. Try again.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn collect(&mut self) -> Result<(), PromptError> {
        if self.inventory.is_full() {
            tracing::info!(capacity = self.inventory.capacity(), "collect rejected: full");
            let err = DomainError::full(self.inventory.capacity());
            return self.report(Action::Collect, &err, "");
        }

        writeln!(self.prompter.output())?;
        writeln!(self.prompter.output(), "--- Collect New Item ---")?;
        let name = self.prompter.ask_text(
            &format!("Item name (max {NAME_MAX_CHARS} characters): "),
            NAME_MAX_CHARS,
        )?;
        let category = self.prompter.ask_text(
            "Item category (e.g. weapon, ammo, heal): ",
            CATEGORY_MAX_CHARS,
        )?;
        let quantity = self.prompter.ask_int(
            "Quantity: ",
            "Invalid input. Please enter a whole number for the quantity: ",
        )?;

        let command = match Item::new(name.clone(), category, quantity) {
            Ok(item) => InventoryCommand::CollectItem(CollectItem { item }),
            Err(err) => return self.report(Action::Collect, &err, &name),
        };

        match self.inventory.execute(&command) {
            Ok(events) => {
                log_events(&events);
                writeln!(self.prompter.output())?;
                writeln!(
                    self.prompter.output(),
                    "Item '{name}' added to the backpack!"
                )?;
                render::listing(self.prompter.output(), self.inventory.list_all())?;
                Ok(())
            }
            Err(err) => {
                tracing::info!(error = %err, "collect rejected");
                self.report(Action::Collect, &err, &name)
            }
        }
    }

    fn discard(&mut self) -> Result<(), PromptError> {
        if self.inventory.is_empty() {
            return self.report(Action::Discard, &DomainError::Empty, "");
        }

        writeln!(self.prompter.output())?;
        writeln!(self.prompter.output(), "--- Discard Item ---")?;
        let name = self
            .prompter
            .ask_text("Name of the item to discard: ", NAME_MAX_CHARS)?;

        let command = InventoryCommand::DiscardItem(DiscardItem { name: name.clone() });
        match self.inventory.execute(&command) {
            Ok(events) => {
                log_events(&events);
                writeln!(self.prompter.output())?;
                writeln!(
                    self.prompter.output(),
                    "Item '{name}' discarded from the backpack!"
                )?;
            }
            Err(err) => {
                if err.is_lookup_miss() {
                    tracing::debug!(error = %err, name = %name, "discard rejected");
                } else {
                    tracing::warn!(error = %err, name = %name, "discard rejected");
                }
                self.report(Action::Discard, &err, &name)?;
            }
        }
        render::listing(self.prompter.output(), self.inventory.list_all())?;
        Ok(())
    }

    fn find(&mut self) -> Result<(), PromptError> {
        if self.inventory.is_empty() {
            return self.report(Action::Find, &DomainError::Empty, "");
        }

        writeln!(self.prompter.output())?;
        writeln!(self.prompter.output(), "--- Find Item ---")?;
        let name = self
            .prompter
            .ask_text("Name of the item to find: ", NAME_MAX_CHARS)?;

        match self.inventory.find_by_name(&name) {
            Ok((_, item)) => {
                render::item_details(self.prompter.output(), &name, item)?;
                Ok(())
            }
            Err(err) => self.report(Action::Find, &err, &name),
        }
    }

    fn report(&mut self, action: Action, err: &DomainError, name: &str) -> Result<(), PromptError> {
        let message = domain_error_message(action, err, name);
        writeln!(self.prompter.output())?;
        writeln!(self.prompter.output(), "{message}")?;
        Ok(())
    }
}

fn log_events(events: &[InventoryEvent]) {
    for event in events {
        match serde_json::to_string(event) {
            Ok(payload) => {
                tracing::debug!(event_type = event.event_type(), %payload, "event applied")
            }
            Err(err) => {
                tracing::warn!(event_type = event.event_type(), error = %err, "event not serializable")
            }
        }
    }
}
