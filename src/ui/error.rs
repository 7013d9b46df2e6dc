use crossterm::style::Stylize;
use facilitate::FacilitateError;

use crate::ui::theme::{self, Icon};

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.paint(supports_color, supports_unicode);
    let message = format!("{:#}", err);
    let mut out = if supports_color {
        format!("\n{} {}\n", icon, message.with(theme::colors::ERROR).bold())
    } else {
        format!("\n{} {}\n", icon, message)
    };

    if let Some(hint) = err
        .downcast_ref::<FacilitateError>()
        .and_then(FacilitateError::hint)
    {
        if supports_color {
            out.push_str(&format!("  {}\n", hint.with(theme::colors::DIM)));
        } else {
            out.push_str(&format!("  {}\n", hint));
        }
    }

    out
}

pub fn print_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) {
    eprint!("{}", format_error(err, supports_color, supports_unicode));
}

/// Operator said no; not an error
pub fn print_aborted(supports_color: bool) {
    let message = "Operation aborted. Exiting!";
    if supports_color {
        eprintln!("\n{}", message.with(theme::colors::ERROR).bold());
    } else {
        eprintln!("\n{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_with_hint() {
        let err = anyhow::Error::from(FacilitateError::AwsCliNotFound {
            bin: "aws".to_string(),
        });
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("[FAIL] AWS CLI not found (tried 'aws')"));
        assert!(rendered.contains("FACILITATE_AWS_BIN"));
    }

    #[test]
    fn test_format_error_without_hint() {
        let err = anyhow::anyhow!("Generic error message");
        let rendered = format_error(&err, false, true);
        assert_eq!(rendered, "\n✗ Generic error message\n");
    }

    #[test]
    fn test_format_error_includes_context_chain() {
        let err = anyhow::Error::from(FacilitateError::Aborted).context("while confirming");
        let rendered = format_error(&err, false, true);
        assert!(rendered.contains("while confirming: operation aborted by user"));
    }
}
