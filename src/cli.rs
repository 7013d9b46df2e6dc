use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// facilitate - helpers for operating ECS clusters
#[derive(Parser, Debug)]
#[command(name = "facilitate")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Disable spinners
    #[arg(long, global = true)]
    pub no_animation: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Amazon ECS helpers
    #[command(subcommand)]
    Ecs(EcsCommands),
}

#[derive(Subcommand, Debug)]
pub enum EcsCommands {
    /// Run a command inside a container of a service running on EC2
    #[command(
        after_help = "Example:\n  facilitate ecs exec --cluster prod --service web web bin/rails console"
    )]
    Exec(ExecArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExecArgs {
    /// ECS cluster name or ARN
    #[arg(long)]
    pub cluster: Option<String>,

    /// ECS service name
    #[arg(long)]
    pub service: Option<String>,

    /// SSH login user on the container instance [default: ec2-user]
    #[arg(long)]
    pub user: Option<String>,

    /// SSH private key [default: ~/.ssh/id_rsa]
    #[arg(short = 'i', long)]
    pub identity_file: Option<PathBuf>,

    /// Connect to this instance (id or address) without asking
    #[arg(long)]
    pub instance: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print the ssh command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Container name as declared in the task definition
    pub container: String,

    /// Command to run inside the container
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}
