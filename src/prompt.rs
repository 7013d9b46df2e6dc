//! Host selection and confirmation rules
//!
//! The rules live here; the terminal widgets implementing [`Prompter`]
//! live in the binary.

use crate::error::{FacilitateError, FacilitateResult};
use crate::models::{ExecRequest, Target};

/// Interactive questions asked before connecting
pub trait Prompter {
    /// Whether a human can answer prompts
    fn is_interactive(&self) -> bool;

    /// Pick one of `targets`; returns its index
    fn select_target(&mut self, message: &str, targets: &[Target]) -> FacilitateResult<usize>;

    /// Yes/no question, `default` preselected
    fn confirm(&mut self, message: &str, default: bool) -> FacilitateResult<bool>;
}

pub const SELECT_MESSAGE: &str = "Choose EC2 instance to connect to";

/// Decide which host to connect to
///
/// An explicit `--instance` wins; a single candidate is taken as-is when
/// nobody can be asked.
pub fn choose_target(
    prompter: &mut impl Prompter,
    targets: &[Target],
    preselected: Option<&str>,
) -> FacilitateResult<Target> {
    if let Some(wanted) = preselected {
        return targets
            .iter()
            .find(|t| t.matches(wanted))
            .cloned()
            .ok_or_else(|| FacilitateError::InstanceNotFound {
                wanted: wanted.to_string(),
                candidates: targets.iter().map(|t| t.address.clone()).collect(),
            });
    }

    if !prompter.is_interactive() {
        return match targets {
            [only] => Ok(only.clone()),
            _ => Err(FacilitateError::NotInteractive {
                what: "choose between several instances".to_string(),
            }),
        };
    }

    let index = prompter.select_target(SELECT_MESSAGE, targets)?;
    targets
        .get(index)
        .cloned()
        .ok_or(FacilitateError::Aborted)
}

/// Text of the final confirmation question
pub fn confirmation_message(request: &ExecRequest, target: &Target) -> String {
    format!(
        "You are about to execute \"{}\" in the container \"{}\" running on the instance \"{}\". Do you want to continue?",
        request.normalized_command(),
        request.container,
        target.address
    )
}

/// Ask before running anything on the host; `Aborted` when declined
pub fn confirm_exec(
    prompter: &mut impl Prompter,
    request: &ExecRequest,
    target: &Target,
    assume_yes: bool,
) -> FacilitateResult<()> {
    if assume_yes {
        return Ok(());
    }
    if !prompter.is_interactive() {
        return Err(FacilitateError::NotInteractive {
            what: "confirm the command".to_string(),
        });
    }
    if prompter.confirm(&confirmation_message(request, target), true)? {
        Ok(())
    } else {
        Err(FacilitateError::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ec2InstanceId;
    use std::path::PathBuf;

    struct Scripted {
        interactive: bool,
        selection: usize,
        answer: bool,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(interactive: bool) -> Self {
            Self {
                interactive,
                selection: 0,
                answer: true,
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for Scripted {
        fn is_interactive(&self) -> bool {
            self.interactive
        }

        fn select_target(&mut self, message: &str, _targets: &[Target]) -> FacilitateResult<usize> {
            self.asked.push(message.to_string());
            Ok(self.selection)
        }

        fn confirm(&mut self, message: &str, default: bool) -> FacilitateResult<bool> {
            assert!(default);
            self.asked.push(message.to_string());
            Ok(self.answer)
        }
    }

    fn targets() -> Vec<Target> {
        vec![
            Target {
                instance_id: Ec2InstanceId::from("i-a"),
                address: "3.3.3.1".to_string(),
            },
            Target {
                instance_id: Ec2InstanceId::from("i-b"),
                address: "3.3.3.2".to_string(),
            },
        ]
    }

    fn request() -> ExecRequest {
        ExecRequest {
            cluster: Some("prod".to_string()),
            service: Some("web".to_string()),
            container: "web".to_string(),
            command: vec!["bin/rails".to_string(), "c".to_string()],
            user: "ec2-user".to_string(),
            identity_file: PathBuf::from("/home/op/.ssh/id_rsa"),
        }
    }

    #[test]
    fn preselected_instance_matches_by_id_or_address() {
        let mut p = Scripted::new(true);
        let by_id = choose_target(&mut p, &targets(), Some("i-b")).unwrap();
        let by_ip = choose_target(&mut p, &targets(), Some("3.3.3.1")).unwrap();
        assert_eq!(by_id.address, "3.3.3.2");
        assert_eq!(by_ip.instance_id.as_str(), "i-a");
        assert!(p.asked.is_empty());
    }

    #[test]
    fn unknown_preselected_instance_is_an_error() {
        let mut p = Scripted::new(true);
        let err = choose_target(&mut p, &targets(), Some("9.9.9.9")).unwrap_err();
        assert!(matches!(err, FacilitateError::InstanceNotFound { .. }));
    }

    #[test]
    fn interactive_selection_uses_prompt() {
        let mut p = Scripted::new(true);
        p.selection = 1;
        let chosen = choose_target(&mut p, &targets(), None).unwrap();
        assert_eq!(chosen.address, "3.3.3.2");
        assert_eq!(p.asked, vec![SELECT_MESSAGE.to_string()]);
    }

    #[test]
    fn single_target_is_taken_without_terminal() {
        let mut p = Scripted::new(false);
        let only = &targets()[..1];
        let chosen = choose_target(&mut p, only, None).unwrap();
        assert_eq!(chosen.address, "3.3.3.1");
    }

    #[test]
    fn several_targets_without_terminal_is_an_error() {
        let mut p = Scripted::new(false);
        let err = choose_target(&mut p, &targets(), None).unwrap_err();
        assert!(matches!(err, FacilitateError::NotInteractive { .. }));
    }

    #[test]
    fn confirmation_message_names_command_container_and_host() {
        let msg = confirmation_message(&request(), &targets()[0]);
        assert_eq!(
            msg,
            "You are about to execute \"bin/rails c\" in the container \"web\" running on the instance \"3.3.3.1\". Do you want to continue?"
        );
    }

    #[test]
    fn declined_confirmation_aborts() {
        let mut p = Scripted::new(true);
        p.answer = false;
        let err = confirm_exec(&mut p, &request(), &targets()[0], false).unwrap_err();
        assert!(matches!(err, FacilitateError::Aborted));
    }

    #[test]
    fn assume_yes_skips_the_question() {
        let mut p = Scripted::new(false);
        confirm_exec(&mut p, &request(), &targets()[0], true).unwrap();
        assert!(p.asked.is_empty());
    }

    #[test]
    fn confirmation_without_terminal_requires_yes() {
        let mut p = Scripted::new(false);
        let err = confirm_exec(&mut p, &request(), &targets()[0], false).unwrap_err();
        assert!(matches!(err, FacilitateError::NotInteractive { .. }));
    }
}
