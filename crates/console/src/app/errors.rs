//! Mapping of domain errors to player-facing messages.

use lootbag_core::DomainError;

/// The menu action an error came out of; wording differs per action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Collect,
    Discard,
    Find,
}

pub fn domain_error_message(action: Action, err: &DomainError, name: &str) -> String {
    match (action, err) {
        (_, DomainError::Full { .. }) => {
            "WARNING: The backpack is full! No room for more loot.".to_string()
        }
        (Action::Discard, DomainError::Empty) => {
            "The backpack is empty. Nothing to discard.".to_string()
        }
        (_, DomainError::Empty) => "The backpack is empty. Nothing to search for.".to_string(),
        (Action::Find, DomainError::NotFound) => {
            format!("Item '{name}' not found in the backpack. Try another name.")
        }
        (_, DomainError::NotFound) => format!("ERROR: Item '{name}' not found in the backpack."),
        (_, DomainError::Validation(msg)) => format!("ERROR: Invalid item: {msg}."),
        (_, DomainError::TooLong { field, max }) => {
            format!("ERROR: The {field} must be at most {max} characters.")
        }
    }
}
