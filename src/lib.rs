//! facilitate - operator helper for ECS clusters backed by EC2
//!
//! `facilitate ecs exec` finds the hosts running a container of an ECS
//! service, lets the operator pick one, then runs a command inside the
//! container over `ssh` + `docker exec`.

pub mod aws;
pub mod config;
pub mod discovery;
pub mod error;
pub mod models;
pub mod prompt;
pub mod remote;

// Re-exports for convenience
pub use aws::{AwsCli, ClusterApi};
pub use config::{Config, ConfigWarning};
pub use discovery::{Discovery, Progress, Scope, SilentProgress};
pub use error::{FacilitateError, FacilitateResult};
pub use models::{AddressKind, ExecRequest, Target};
pub use prompt::{choose_target, confirm_exec, Prompter};
pub use remote::SshExec;
