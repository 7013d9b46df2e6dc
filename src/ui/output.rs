use facilitate::ConfigWarning;

use crate::ui::theme::Icon;

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_color: bool, supports_unicode: bool) {
    let icon = Icon::Warning.paint(supports_color, supports_unicode);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", icon, w.key, w.file.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", icon, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
