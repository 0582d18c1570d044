use anyhow::Context;

use lootbag_console::{Console, ConsoleConfig};

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env()?;
    lootbag_observability::init(config.log_format);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(&config, stdin.lock(), stdout.lock())
        .context("failed to create inventory")?;

    console.run().context("console session failed")?;
    Ok(())
}
