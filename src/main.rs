//! Terminal Snake runner (default binary).
//!
//! Configuration comes from `SNAKE_*` environment variables; there are no
//! command-line flags. Keys are read on a background thread and sent to the
//! session over a channel.

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use tui_snake::app::TerminalSink;
use tui_snake::engine::{init_logging, GameConfig, Session, SessionSummary};
use tui_snake::input::KeyReader;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let session = Session::from_config(&config)?;
    init_logging(&config)?;

    let mut sink = TerminalSink::stdout();
    if let Err(e) = sink.renderer_mut().enter() {
        let _ = sink.renderer_mut().exit();
        return Err(e);
    }

    let result = run(session, &mut sink);

    // Always try to restore terminal state.
    let _ = sink.renderer_mut().exit();

    match result {
        Ok(summary) => {
            println!(
                "score {} (best {}) over {} episode(s)",
                summary.final_score, summary.best_score, summary.episodes
            );
            Ok(())
        }
        Err(e) => {
            log::error!("session failed: {:#}", e);
            Err(e)
        }
    }
}

fn run(session: Session, sink: &mut TerminalSink) -> Result<SessionSummary> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("building tokio runtime")?;

    let (tx, rx) = mpsc::unbounded_channel();
    let reader = KeyReader::spawn(tx).context("spawning key reader")?;

    let summary = rt.block_on(session.run(rx, sink));

    // The receiver is gone now; the reader notices and stops.
    reader.shutdown();
    summary
}
