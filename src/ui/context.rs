use crate::cli::ColorWhen;
use crate::ui::terminal::TerminalCapabilities;
use facilitate::config::{AnimationMode, ColorMode, OutputConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
    /// Prompts can be answered
    pub interactive: bool,
}

impl UiContext {
    pub fn new(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        output: &OutputConfig,
    ) -> Self {
        let caps = TerminalCapabilities::detect();
        Self::from_caps(verbose, cli_color, cli_no_animation, output, caps)
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        output: &OutputConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        // Spinners would interleave with log lines at -vv and above
        let animation = if cli_no_animation || caps.is_ci || verbose >= 2 {
            false
        } else {
            match output.animation {
                AnimationMode::Never => false,
                AnimationMode::Always => caps.is_tty,
                AnimationMode::Auto => caps.is_tty && !caps.is_ci,
            }
        };

        Self {
            color,
            unicode,
            animation,
            interactive: caps.stdin_tty && caps.is_tty,
        }
    }
}
