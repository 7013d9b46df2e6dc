use crossterm::style::Stylize;

use crate::ui::theme::{self, Icon};

/// Braille "dots" frames
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

/// One animated status line
#[derive(Debug, Clone)]
pub struct Spinner {
    message: String,
    frame: usize,
    unicode: bool,
}

impl Spinner {
    pub fn new(message: impl Into<String>, unicode: bool) -> Self {
        Self {
            message: message.into(),
            frame: 0,
            unicode,
        }
    }

    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn line(&self) -> String {
        let frames = if self.unicode { FRAMES } else { FRAMES_ASCII };
        format!("{} {}", frames[self.frame % frames.len()], self.message)
    }
}

/// Final line printed once a step is done
pub fn outcome_line(icon: Icon, message: &str, color: bool, unicode: bool) -> String {
    format!("{} {}", icon.paint(color, unicode), message)
}

/// Indented result under a step, e.g. `  - 3.3.3.1`
pub fn item_line(item: &str, color: bool, unicode: bool) -> String {
    let line = format!("  {} {}", Icon::Bullet.glyph(unicode), item);
    if color {
        line.with(theme::colors::SUCCESS).to_string()
    } else {
        line
    }
}
