//! Spinner-backed step reporting for discovery

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, QueueableCommand};
use facilitate::Progress;

use crate::logging;
use crate::ui::context::UiContext;
use crate::ui::spinner::{item_line, outcome_line, Spinner};
use crate::ui::theme::Icon;

const TICK: Duration = Duration::from_millis(80);

/// Redraws one spinner line on stderr until stopped
struct Ticker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn start(mut spinner: Spinner) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let _ = io::stderr().queue(cursor::Hide);
            logging::set_live_line(true);
            while !flag.load(Ordering::Relaxed) {
                let _ = redraw(&mut io::stderr().lock(), &spinner.line());
                spinner.advance();
                thread::sleep(TICK);
            }
            let mut out = io::stderr().lock();
            let _ = redraw(&mut out, "");
            logging::set_live_line(false);
            let _ = out.queue(cursor::Show);
            let _ = out.flush();
        });

        Self { stop, handle }
    }

    fn finish(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.handle.join();
    }
}

fn redraw(out: &mut impl Write, line: &str) -> io::Result<()> {
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(Clear(ClearType::CurrentLine))?;
    out.write_all(line.as_bytes())?;
    out.flush()
}

/// Writes discovery progress to stderr
///
/// With animation on, a spinner runs while a step is in flight; otherwise
/// only the outcome line is printed.
pub struct SpinnerProgress {
    ui: UiContext,
    ticker: Option<Ticker>,
}

impl SpinnerProgress {
    pub fn new(ui: UiContext) -> Self {
        Self { ui, ticker: None }
    }

    fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.finish();
        }
    }
}

impl Progress for SpinnerProgress {
    fn begin(&mut self, message: &str) {
        self.stop();
        if self.ui.animation {
            self.ticker = Some(Ticker::start(Spinner::new(message, self.ui.unicode)));
        }
    }

    fn succeed(&mut self, message: &str) {
        self.stop();
        eprintln!("{}", outcome_line(Icon::Success, message, self.ui.color, self.ui.unicode));
    }

    fn fail(&mut self, message: &str) {
        self.stop();
        eprintln!("{}", outcome_line(Icon::Error, message, self.ui.color, self.ui.unicode));
    }

    fn item(&mut self, item: &str) {
        eprintln!("{}", item_line(item, self.ui.color, self.ui.unicode));
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_returns_to_column_and_clears() {
        let mut buf = Vec::new();
        redraw(&mut buf, "⠋ Obtaining").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("⠋ Obtaining"));
        assert!(text.contains("\u{1b}["));
    }
}
