//! Interactive view handler
//!
//! Starts the one-off fetch in the background, then hands the controller to
//! the TUI renderer. The final address is printed after the terminal is
//! restored so the view can be reopened later. When stdout is not a terminal
//! the page is printed once instead.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use tagview_engine::decode;
use tagview_providers::HttpPostSource;
use tagview_runtime::{Config, MemoryLocation, ViewController, spawn_initial_fetch};

use crate::presentation::presenters::build_dump;
use crate::presentation::renderers::{ConsoleRenderer, TuiRenderer};

pub fn handle(config: &Config, query: Option<String>) -> Result<()> {
    let query = query.unwrap_or_default();
    let source = HttpPostSource::new(&config.endpoint)
        .with_context(|| format!("invalid endpoint: {}", config.endpoint))?;

    tracing::info!(endpoint = %source.url(), %query, "opening view");

    let mut controller = ViewController::new(
        decode(&query),
        MemoryLocation::new(query),
        config.debounce(),
    );
    let rx = spawn_initial_fetch(source);

    // Auto-select TUI mode if stdout is a TTY
    if !std::io::stdout().is_terminal() {
        let posts = rx.recv().unwrap_or_default();
        controller.on_posts_loaded(posts);
        return ConsoleRenderer::new(false).render(&build_dump(&controller));
    }

    let address = TuiRenderer::new(controller).run(rx)?;
    println!("{}", address);

    Ok(())
}
