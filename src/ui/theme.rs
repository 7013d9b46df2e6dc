use crossterm::style::{Color, Stylize};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::fmt;

/// The only colors the CLI paints with
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Status glyph with an ASCII stand-in for non-UTF-8 terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Bullet,
    Pointer,
}

impl Icon {
    pub fn glyph(self, unicode: bool) -> &'static str {
        let (fancy, plain) = match self {
            Icon::Success => ("✓", "[OK]"),
            Icon::Error => ("✗", "[FAIL]"),
            Icon::Warning => ("⚠", "[WARN]"),
            Icon::Bullet => ("-", "-"),
            Icon::Pointer => ("❯", ">"),
        };
        if unicode {
            fancy
        } else {
            plain
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Success | Icon::Bullet => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Pointer => colors::INFO,
        }
    }

    pub fn paint(self, color: bool, unicode: bool) -> String {
        let glyph = self.glyph(unicode);
        if color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}

/// dialoguer theme using our pointer icon for the active select item.
///
/// Wraps `ColorfulTheme` (or `SimpleTheme` when color is off) and only
/// overrides select item formatting.
pub struct FacilitateTheme {
    unicode: bool,
    color: bool,
    inner: Box<dyn Theme>,
}

impl FacilitateTheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        let inner: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self {
            unicode,
            color,
            inner,
        }
    }

    pub fn pointer(&self) -> &'static str {
        Icon::Pointer.glyph(self.unicode)
    }
}

impl Theme for FacilitateTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    fn format_fuzzy_select_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        search_term: &str,
        bytes_pos: usize,
    ) -> fmt::Result {
        self.inner
            .format_fuzzy_select_prompt(f, prompt, search_term, bytes_pos)
    }

    fn format_fuzzy_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
        highlight_matches: bool,
        matcher: &SkimMatcherV2,
        search_term: &str,
    ) -> fmt::Result {
        self.inner.format_fuzzy_select_prompt_item(
            f,
            text,
            active,
            highlight_matches,
            matcher,
            search_term,
        )
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if !active {
            return write!(f, "  {}", text);
        }
        if self.color {
            write!(
                f,
                "{} {}",
                self.pointer().with(colors::INFO),
                text.with(colors::INFO)
            )
        } else {
            write!(f, "{} {}", self.pointer(), text)
        }
    }
}
