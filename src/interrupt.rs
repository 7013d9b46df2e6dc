//! Ctrl+C handling
//!
//! Before ssh takes over we restore the cursor (the spinner hides it) and
//! exit 130. Once ssh owns the terminal, SIGINT belongs to it.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{cursor, QueueableCommand};
use tracing::debug;

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

pub const INTERRUPTED_EXIT_CODE: i32 = 130;

pub fn install_handler() {
    let result = ctrlc::set_handler(|| {
        if SESSION_ACTIVE.load(Ordering::SeqCst) {
            return;
        }
        let mut err = std::io::stderr();
        let _ = err.queue(cursor::Show);
        let _ = writeln!(err);
        let _ = err.flush();
        std::process::exit(INTERRUPTED_EXIT_CODE);
    });

    if let Err(e) = result {
        debug!(error = %e, "could not install Ctrl+C handler");
    }
}

/// Leave SIGINT to the child process from now on
pub fn hand_off_to_session() {
    SESSION_ACTIVE.store(true, Ordering::SeqCst);
}
