//! Core data types shared by discovery, prompting and the ssh runner

use std::fmt;
use std::path::PathBuf;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// ARN of an ECS task
    TaskArn
);
string_id!(
    /// ARN of an EC2 host registered with an ECS cluster
    ContainerInstanceArn
);
string_id!(
    /// EC2 instance id (`i-...`)
    Ec2InstanceId
);

/// Container entry inside a task description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub name: String,
}

/// Task as returned by `describe-tasks`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub task_arn: TaskArn,
    pub container_instance_arn: Option<ContainerInstanceArn>,
    pub containers: Vec<Container>,
}

impl Task {
    pub fn has_container(&self, name: &str) -> bool {
        self.containers.iter().any(|c| c.name == name)
    }
}

/// Container instance as returned by `describe-container-instances`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInstance {
    pub container_instance_arn: ContainerInstanceArn,
    pub ec2_instance_id: Ec2InstanceId,
}

/// EC2 instance as returned by `describe-instances`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub instance_id: Ec2InstanceId,
    pub public_ip_address: Option<String>,
    pub private_ip_address: Option<String>,
}

/// Which instance address ssh connects through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressKind {
    #[default]
    Public,
    Private,
}

impl AddressKind {
    pub fn label(self) -> &'static str {
        match self {
            AddressKind::Public => "public",
            AddressKind::Private => "private",
        }
    }

    pub fn pick(self, instance: &Instance) -> Option<&str> {
        match self {
            AddressKind::Public => instance.public_ip_address.as_deref(),
            AddressKind::Private => instance.private_ip_address.as_deref(),
        }
    }
}

/// Host the operator can connect to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub instance_id: Ec2InstanceId,
    pub address: String,
}

impl Target {
    /// True when `needle` names this host by instance id or address
    pub fn matches(&self, needle: &str) -> bool {
        self.instance_id.as_str() == needle || self.address == needle
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

/// Fully resolved inputs of `ecs exec`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRequest {
    pub cluster: Option<String>,
    pub service: Option<String>,
    pub container: String,
    pub command: Vec<String>,
    pub user: String,
    pub identity_file: PathBuf,
}

impl ExecRequest {
    /// Command words joined the way they are shown and sent to docker
    pub fn normalized_command(&self) -> String {
        self.command.join(" ")
    }
}
