//! Background key reader.
//!
//! Terminal reads block, so they run on a dedicated thread that forwards
//! decoded [`Command`]s to the game loop over a channel. The game loop is the
//! only owner of game state; this thread never touches it.

use std::io;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;

use crate::map::command_for_key;
use crate::types::Command;

/// How long a single poll may block before the stop flag is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Handle to the running key-reader thread.
pub struct KeyReader {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl KeyReader {
    /// Spawn the reader thread.
    pub fn spawn(tx: UnboundedSender<Command>) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("key-reader".to_string())
            .spawn(move || read_loop(&tx, &stop_flag))?;
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Ask the thread to stop and wait for it.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for KeyReader {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

fn read_loop(tx: &UnboundedSender<Command>, stop: &AtomicBool) {
    while !stop.load(Ordering::Relaxed) && !tx.is_closed() {
        let ready = match event::poll(POLL_INTERVAL) {
            Ok(ready) => ready,
            Err(e) => {
                log::error!("key reader: poll failed: {}", e);
                let _ = tx.send(Command::Quit);
                return;
            }
        };
        if !ready {
            continue;
        }
        match event::read() {
            Ok(ev) => {
                if forward_event(ev, tx).is_break() {
                    return;
                }
            }
            Err(e) => {
                log::error!("key reader: read failed: {}", e);
                let _ = tx.send(Command::Quit);
                return;
            }
        }
    }
}

/// Decode one terminal event and forward it.
///
/// Breaks after forwarding `Quit` or when the receiver is gone. Key repeats
/// and releases are ignored; only presses turn the snake.
pub fn forward_event(ev: Event, tx: &UnboundedSender<Command>) -> ControlFlow<()> {
    let Event::Key(key) = ev else {
        return ControlFlow::Continue(());
    };
    if key.kind != KeyEventKind::Press {
        return ControlFlow::Continue(());
    }
    let Some(cmd) = command_for_key(key) else {
        return ControlFlow::Continue(());
    };
    log::trace!("key {:?} -> {:?}", key.code, cmd);
    if tx.send(cmd).is_err() || cmd == Command::Quit {
        return ControlFlow::Break(());
    }
    ControlFlow::Continue(())
}
