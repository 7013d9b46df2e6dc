//! `facilitate ecs ...` commands

use anyhow::{Context, Result};
use facilitate::config::expand_home;
use facilitate::{
    choose_target, confirm_exec, AwsCli, Config, Discovery, ExecRequest, Scope, SshExec,
};
use tracing::{info, warn};

use crate::cli::ExecArgs;
use crate::ui::context::UiContext;
use crate::ui::progress::SpinnerProgress;
use crate::ui::prompt::DialoguerPrompter;

/// Merge flags over config defaults
pub fn build_request(args: &ExecArgs, config: &Config) -> ExecRequest {
    let defaults = &config.defaults;
    ExecRequest {
        cluster: args.cluster.clone().or_else(|| defaults.cluster.clone()),
        service: args.service.clone().or_else(|| defaults.service.clone()),
        container: args.container.clone(),
        command: args.command.clone(),
        user: args.user.clone().unwrap_or_else(|| defaults.user.clone()),
        identity_file: match &args.identity_file {
            Some(path) => expand_home(&path.to_string_lossy()),
            None => config.identity_path(),
        },
    }
}

/// Find the hosts, pick one, confirm, then hand the terminal to ssh
///
/// Returns the exit code to terminate with.
pub fn cmd_exec(args: &ExecArgs, config: &Config, ui: &UiContext) -> Result<i32> {
    let request = build_request(args, config);
    info!(
        cluster = request.cluster.as_deref().unwrap_or("default"),
        service = request.service.as_deref().unwrap_or("*"),
        container = %request.container,
        "resolving container hosts"
    );

    if !request.identity_file.exists() {
        warn!(path = %request.identity_file.display(), "identity file does not exist");
    }

    let targets = {
        let aws = AwsCli::from_config(&config.aws);
        let mut discovery = Discovery::new(aws, SpinnerProgress::new(*ui))
            .with_address_kind(config.ssh.address_kind());
        let scope = Scope::new(request.cluster.clone(), request.service.clone());
        discovery.resolve(&scope, &request.container)?
    };

    let mut prompter = DialoguerPrompter::new(ui);
    let target = choose_target(&mut prompter, &targets, args.instance.as_deref())?;
    confirm_exec(&mut prompter, &request, &target, args.yes || args.dry_run)?;

    let ssh = SshExec::new(&config.ssh, &request, &target);
    if args.dry_run {
        println!("{}", ssh.display());
        return Ok(0);
    }

    eprintln!();
    crate::interrupt::hand_off_to_session();
    info!(instance = %target.instance_id, address = %target.address, "connecting");
    ssh.run()
        .with_context(|| format!("failed to run '{}'", ssh.program()))
}
