pub mod context;
pub mod error;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod spinner;
pub mod terminal;
pub mod theme;
