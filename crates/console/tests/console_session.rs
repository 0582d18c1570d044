use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use lootbag_console::{Console, ConsoleConfig};
use lootbag_inventory::Inventory;
use proptest::prelude::*;

/// Run a whole scripted session and return the final inventory and everything printed.
fn run_session(capacity: usize, script: &str) -> (Inventory, String) {
    let config = ConsoleConfig {
        capacity,
        ..ConsoleConfig::default()
    };
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut console = Console::new(&config, input, Vec::new()).unwrap();
    console.run().unwrap();

    let (inventory, output) = console.into_parts();
    (inventory, String::from_utf8(output).unwrap())
}

fn names(inventory: &Inventory) -> Vec<&str> {
    inventory.list_all().iter().map(|item| item.name()).collect()
}

#[test]
fn collect_then_quit() {
    let (inventory, out) = run_session(10, "1\nSword\nweapon\n1\n4\n");

    assert_eq!(names(&inventory), ["Sword"]);
    assert!(out.starts_with("Starting the loot inventory...\n"));
    assert!(out.contains("Item 'Sword' added to the backpack!"));
    assert!(out.contains("  [1] Name: Sword, Category: weapon, Quantity: 1\n"));
    assert!(out.contains("Items in backpack: 1/10\n"));
    assert!(out.contains("Game over."));
}

#[test]
fn quantity_is_reprompted_until_numeric() {
    let (inventory, out) = run_session(10, "1\nAmmo\nammo\nmany\n30\n4\n");

    assert_eq!(inventory.list_all()[0].quantity(), 30);
    assert_eq!(
        out.matches("Please enter a whole number for the quantity").count(),
        1
    );
}

#[test]
fn long_fields_are_truncated() {
    let long_name = "A".repeat(40);
    let script = format!("1\n{long_name}\nexplosive-ordnance-heavy\n1\n4\n");
    let (inventory, _) = run_session(10, &script);

    let item = &inventory.list_all()[0];
    assert_eq!(item.name(), "A".repeat(29));
    assert_eq!(item.category(), "explosive-ordnance-");
}

#[test]
fn full_backpack_skips_prompts() {
    let (inventory, out) = run_session(1, "1\nRope\ntool\n1\n1\n4\n");

    assert_eq!(names(&inventory), ["Rope"]);
    assert!(out.contains("WARNING: The backpack is full!"));
    assert_eq!(out.matches("--- Collect New Item ---").count(), 1);
}

#[test]
fn discard_by_name_ignores_case_and_keeps_order() {
    let script = "1\nSword\nweapon\n1\n\
                  1\nMedkit\nheal\n2\n\
                  1\nRope\ntool\n1\n\
                  2\nmedkit\n4\n";
    let (inventory, out) = run_session(10, script);

    assert_eq!(names(&inventory), ["Sword", "Rope"]);
    assert!(out.contains("Item 'medkit' discarded from the backpack!"));
    assert!(out.contains("  [2] Name: Rope, Category: tool, Quantity: 1\n"));
}

#[test]
fn discard_missing_item_reports_and_lists() {
    let (inventory, out) = run_session(10, "1\nSword\nweapon\n1\n2\nBow\n4\n");

    assert_eq!(names(&inventory), ["Sword"]);
    assert!(out.contains("ERROR: Item 'Bow' not found in the backpack."));
}

#[test]
fn discard_and_find_on_empty_backpack() {
    let (inventory, out) = run_session(10, "2\n3\n4\n");

    assert!(inventory.is_empty());
    assert!(out.contains("The backpack is empty. Nothing to discard."));
    assert!(out.contains("The backpack is empty. Nothing to search for."));
    assert!(!out.contains("--- Discard Item ---"));
    assert!(!out.contains("--- Find Item ---"));
}

#[test]
fn find_shows_details_of_first_match() {
    let script = "1\nMedkit\nheal\n1\n1\nMedkit\nheal\n5\n3\nMEDKIT\n3\nBow\n4\n";
    let (_, out) = run_session(10, script);

    assert!(out.contains("Item 'MEDKIT' found in the backpack!"));
    assert!(out.contains("  -> Name: Medkit\n"));
    assert!(out.contains("  -> Quantity: 1\n"));
    assert!(!out.contains("  -> Quantity: 5\n"));
    assert!(out.contains("Item 'Bow' not found in the backpack. Try another name."));
}

#[test]
fn invalid_menu_input_repeats_menu() {
    let (_, out) = run_session(10, "abc\n9\n4\n");

    assert_eq!(out.matches("Invalid option. Try again.").count(), 2);
    assert_eq!(out.matches("Choose an option: ").count(), 3);
}

#[test]
fn end_of_input_ends_session_quietly() {
    let (inventory, out) = run_session(10, "1\nSword\n");

    assert!(inventory.is_empty());
    assert!(!out.contains("Game over."));
}

#[test]
fn zero_capacity_is_refused() {
    let config = ConsoleConfig {
        capacity: 0,
        ..ConsoleConfig::default()
    };
    let console = Console::new(&config, Cursor::new(Vec::new()), Vec::new());
    assert!(console.is_err());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: menu noise never touches the inventory.
    #[test]
    fn garbage_menu_input_never_mutates(lines in prop::collection::vec("[a-z05-9 ]{0,6}", 0..8)) {
        let mut script = lines.join("\n");
        script.push_str("\n4\n");
        let (inventory, _) = run_session(10, &script);
        prop_assert!(inventory.is_empty());
    }
}

/// Buffer shared between a test and the subscriber writing into it.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Run a session with a debug-level subscriber installed for this thread only.
fn run_logged_session(capacity: usize, script: &str) -> (Inventory, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let (inventory, _) = tracing::subscriber::with_default(subscriber, || {
        run_session(capacity, script)
    });
    (inventory, logs.text())
}

#[test]
fn applied_events_are_logged_with_json_payload() {
    let (_, logs) = run_logged_session(10, "1\nSword\nweapon\n1\n2\nsword\n4\n");

    assert!(logs.contains("event_type=\"inventory.item.collected\""));
    assert!(logs.contains("event_type=\"inventory.item.discarded\""));
    assert!(logs.contains(r#""name":"Sword""#));
    assert!(logs.contains(r#""category":"weapon""#));
}

#[test]
fn full_backpack_is_not_logged_as_warning() {
    let (_, logs) = run_logged_session(1, "1\nRope\ntool\n1\n1\n4\n");

    assert!(logs.contains("collect rejected: full"));
    assert!(!logs.contains("WARN"));
}

#[test]
fn new_console_starts_with_empty_inventory_of_configured_capacity() {
    let config = ConsoleConfig {
        capacity: 3,
        ..ConsoleConfig::default()
    };
    let console = Console::new(&config, Cursor::new(Vec::new()), Vec::new()).unwrap();

    assert!(console.inventory().is_empty());
    assert_eq!(console.inventory().capacity(), 3);
}
