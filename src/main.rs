// Entrypoint for the CLI application.
// - Keeps `main` small: set up tracing, open the registry in the working
//   directory and hand it to the UI loop.
// - Returns `anyhow::Result` so terminal failures end the program cleanly.

use restaurant_registry::{registry::Registry, store::Store, store::DATA_FILE, ui::main_menu};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more, so
    // they don't clutter the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = Registry::open(Store::new(DATA_FILE))?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(registry)?;
    Ok(())
}
