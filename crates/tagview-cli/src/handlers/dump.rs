use anyhow::{Context, Result};
use tagview_engine::decode;
use tagview_providers::{HttpPostSource, load_posts};
use tagview_runtime::{Config, MemoryLocation, ViewController};

use crate::presentation::presenters::build_dump;
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::OutputFormat;

pub fn handle(config: &Config, query: Option<String>, format: OutputFormat) -> Result<()> {
    let query = query.unwrap_or_default();
    let source = HttpPostSource::new(&config.endpoint)
        .with_context(|| format!("invalid endpoint: {}", config.endpoint))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let posts = runtime.block_on(load_posts(&source));

    // Search is applied as given; nothing to debounce.
    let mut controller = ViewController::new(
        decode(&query),
        MemoryLocation::new(query),
        config.debounce(),
    );
    controller.on_posts_loaded(posts);

    ConsoleRenderer::new(format == OutputFormat::Json).render(&build_dump(&controller))
}
