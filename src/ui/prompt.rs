use dialoguer::{Confirm, FuzzySelect, Select};
use facilitate::{FacilitateError, FacilitateResult, Prompter, Target};

use crate::ui::context::UiContext;
use crate::ui::theme::FacilitateTheme;

/// Above this many hosts the picker becomes type-to-filter
const FUZZY_THRESHOLD: usize = 10;

/// `Prompter` backed by dialoguer widgets on the terminal
pub struct DialoguerPrompter {
    theme: FacilitateTheme,
    interactive: bool,
}

impl DialoguerPrompter {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            theme: FacilitateTheme::new(ui.color, ui.unicode),
            interactive: ui.interactive,
        }
    }
}

fn prompt_error(err: dialoguer::Error) -> FacilitateError {
    FacilitateError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        err.to_string(),
    ))
}

fn target_label(target: &Target) -> String {
    format!("{}  ({})", target.address, target.instance_id)
}

impl Prompter for DialoguerPrompter {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn select_target(&mut self, message: &str, targets: &[Target]) -> FacilitateResult<usize> {
        let items: Vec<String> = targets.iter().map(target_label).collect();

        let selection = if items.len() > FUZZY_THRESHOLD {
            FuzzySelect::with_theme(&self.theme)
                .with_prompt(message)
                .items(&items)
                .default(0)
                .interact_opt()
        } else {
            Select::with_theme(&self.theme)
                .with_prompt(message)
                .items(&items)
                .default(0)
                .interact_opt()
        }
        .map_err(prompt_error)?;

        selection.ok_or(FacilitateError::Aborted)
    }

    fn confirm(&mut self, message: &str, default: bool) -> FacilitateResult<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)?;
        Ok(answer.unwrap_or(false))
    }
}
