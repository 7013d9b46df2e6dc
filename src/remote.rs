//! ssh hop into the host and `docker exec` into the container
//!
//! ECS agents name containers `ecs-<family>-<revision>-<container>-<hash>`,
//! so `-<container>-` picks out the right one in `docker ps`.

use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::config::SshConfig;
use crate::error::FacilitateResult;
use crate::models::{ExecRequest, Target};

/// A ready-to-run ssh invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshExec {
    program: String,
    args: Vec<String>,
}

impl SshExec {
    /// Build the invocation for `request` against `target`
    pub fn new(ssh: &SshConfig, request: &ExecRequest, target: &Target) -> Self {
        let mut args = vec![
            "-i".to_string(),
            path_arg(&request.identity_file),
            "-t".to_string(),
        ];
        args.extend(ssh.extra_args.iter().cloned());
        args.push(format!("{}@{}", request.user, target.address));
        args.push(remote_command(&request.container, &request.normalized_command()));

        Self {
            program: ssh.bin.clone(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Copy-pasteable command line
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_if_needed)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run with the terminal attached; returns the exit code to propagate
    pub fn run(&self) -> FacilitateResult<i32> {
        debug!(program = %self.program, args = ?self.args, "starting ssh");
        let status = Command::new(&self.program).args(&self.args).status()?;
        debug!(%status, "ssh finished");
        Ok(exit_code(status))
    }
}

/// Shell snippet run on the host: first matching container, then the command
pub fn remote_command(container: &str, command: &str) -> String {
    let filter = format!("name=-{}-", container);
    let script = format!(
        "docker exec -it $(docker ps -q -f {} | head -n 1) {}",
        quote_if_needed(&filter),
        command
    )
    .trim_end()
    .to_string();
    format!("bash -c {}", shell_quote(&script))
}

/// POSIX single-quote `s`
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Leave plain words alone, single-quote everything else
pub fn quote_if_needed(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-.,/:=@%+".contains(c));
    if plain {
        s.to_string()
    } else {
        shell_quote(s)
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(255)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(255)
}
