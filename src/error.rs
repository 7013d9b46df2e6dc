//! Error types for facilitate
//!
//! Library code returns `FacilitateError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for facilitate operations
pub type FacilitateResult<T> = Result<T, FacilitateError>;

/// Main error type for facilitate operations
#[derive(Error, Debug)]
pub enum FacilitateError {
    /// `list-tasks` returned nothing
    #[error("could not find running EC2 tasks{}", scope_suffix(.cluster, .service))]
    NoRunningTasks {
        cluster: Option<String>,
        service: Option<String>,
    },

    /// Running tasks exist but none of them holds the container
    #[error("no running task has a container named '{container}'")]
    ContainerNotFound { container: String },

    /// Matching tasks are not placed on any container instance
    #[error("matching tasks are not placed on any container instance")]
    NoContainerInstances,

    /// Every instance lacked the address we connect through
    #[error("none of the container instances has a {address_kind} IP address")]
    NoReachableInstances { address_kind: &'static str },

    /// The `aws` executable could not be spawned
    #[error("AWS CLI not found (tried '{bin}')")]
    AwsCliNotFound { bin: String },

    /// The `aws` executable ran but reported failure
    #[error("'{command}' failed with {status}: {stderr}")]
    AwsCommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The `aws` executable printed something we could not decode
    #[error("unexpected output from '{command}': {message}")]
    InvalidAwsResponse { command: String, message: String },

    /// `--instance` did not match any candidate
    #[error("instance '{wanted}' is not one of: {}", .candidates.join(", "))]
    InstanceNotFound {
        wanted: String,
        candidates: Vec<String>,
    },

    /// A prompt was needed but stdin is not a terminal
    #[error("cannot {what} without a terminal")]
    NotInteractive { what: String },

    /// Operator declined the confirmation prompt
    #[error("operation aborted by user")]
    Aborted,

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

fn scope_suffix(cluster: &Option<String>, service: &Option<String>) -> String {
    match (cluster, service) {
        (Some(c), Some(s)) => format!(" for service '{}' in cluster '{}'", s, c),
        (Some(c), None) => format!(" in cluster '{}'", c),
        (None, Some(s)) => format!(" for service '{}'", s),
        (None, None) => String::new(),
    }
}

impl FacilitateError {
    /// Short remediation hint shown under the error line
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FacilitateError::NoRunningTasks { .. } => {
                Some("Check --cluster/--service; only tasks with the EC2 launch type are listed.")
            }
            FacilitateError::ContainerNotFound { .. } => {
                Some("The container name must match the name in the task definition.")
            }
            FacilitateError::NoReachableInstances { .. } => {
                Some("Set `use_private_ip = true` under [ssh] when connecting through a VPN or bastion.")
            }
            FacilitateError::AwsCliNotFound { .. } => {
                Some("Install the AWS CLI or point FACILITATE_AWS_BIN at it.")
            }
            FacilitateError::NotInteractive { .. } => {
                Some("Pass --instance and --yes when running from scripts.")
            }
            _ => None,
        }
    }
}
