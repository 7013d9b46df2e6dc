//! Diagnostic logging to stderr
//!
//! `FACILITATE_LOG` (or `RUST_LOG`) takes precedence; otherwise `-v` flags
//! raise the level from `warn`.

use std::env;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, QueueableCommand};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "FACILITATE_LOG";

pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    let explicit = env::var(LOG_ENV)
        .ok()
        .or_else(|| env::var("RUST_LOG").ok())
        .and_then(|spec| EnvFilter::try_new(spec).ok());

    explicit.unwrap_or_else(|| EnvFilter::new(format!("facilitate={}", level_for_verbosity(verbose))))
}

/// Set while a spinner owns the current, unterminated stderr line
static LIVE_LINE: AtomicBool = AtomicBool::new(false);

pub fn set_live_line(active: bool) {
    LIVE_LINE.store(active, Ordering::SeqCst);
}

/// Wipes a spinner frame before the first byte of a log event
struct LogWriter<W> {
    inner: W,
    clear_first: bool,
}

impl<W: Write> Write for LogWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.clear_first {
            self.clear_first = false;
            self.inner
                .queue(cursor::MoveToColumn(0))?
                .queue(Clear(ClearType::CurrentLine))?;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn log_writer() -> LogWriter<io::StderrLock<'static>> {
    LogWriter {
        inner: io::stderr().lock(),
        clear_first: LIVE_LINE.load(Ordering::SeqCst),
    }
}

pub fn init_logging(verbose: u8, ansi: bool) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(build_filter(verbose))
            .with(
                fmt::layer()
                    .with_writer(log_writer)
                    .with_ansi(ansi)
                    .with_target(verbose >= 3)
                    .without_time(),
            )
            .try_init();
    });
}
