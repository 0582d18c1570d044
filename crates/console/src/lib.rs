//! Interactive console for the loot inventory.
//!
//! Everything here is generic over `BufRead`/`Write` so whole sessions can be
//! scripted in tests.

pub mod app;
pub mod config;
pub mod prompt;

pub use app::Console;
pub use config::{ConfigError, ConsoleConfig};
pub use prompt::{PromptError, Prompter};
