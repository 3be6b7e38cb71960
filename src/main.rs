//! Terminal runner (default binary).
//!
//! Starts with one ball; every key press adds another. Ctrl-C exits cleanly.

use anyhow::Result;
use tracing::warn;
use tracing_subscriber::FmtSubscriber;

use bouncii::core::SpawnRng;
use bouncii::input::TerminalKeys;
use bouncii::term::TerminalRenderer;
use bouncii::types::{Physics, Viewport, LOG_LEVEL};
use bouncii::{Driver, ThreadPacer};

fn main() -> Result<()> {
    init_logging();

    let viewport = TerminalRenderer::viewport()?;
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, viewport);

    // Always try to restore terminal state; the renderer also restores on drop.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, viewport: Viewport) -> Result<()> {
    let mut driver = Driver::new(viewport, Physics::default(), SpawnRng::from_entropy());
    driver.run(&mut TerminalKeys::new(), term, &mut ThreadPacer)?;
    Ok(())
}

fn init_logging() {
    let level = LOG_LEVEL.parse().unwrap_or(tracing::Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
