//! JSON shapes printed by `aws ... --output json`
//!
//! ECS responses are camelCase, EC2 responses PascalCase. Only the fields
//! we read are modelled; everything else is ignored.

use serde::Deserialize;

use crate::models::{
    Container, ContainerInstance, ContainerInstanceArn, Ec2InstanceId, Instance, Task, TaskArn,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListTasksResponse {
    #[serde(default)]
    pub task_arns: Vec<TaskArn>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DescribeTasksResponse {
    #[serde(default)]
    pub tasks: Vec<TaskDescription>,
    #[serde(default)]
    pub failures: Vec<Failure>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TaskDescription {
    pub task_arn: TaskArn,
    #[serde(default)]
    pub container_instance_arn: Option<ContainerInstanceArn>,
    #[serde(default)]
    pub containers: Vec<ContainerDescription>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContainerDescription {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DescribeContainerInstancesResponse {
    #[serde(default)]
    pub container_instances: Vec<ContainerInstanceDescription>,
    #[serde(default)]
    pub failures: Vec<Failure>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ContainerInstanceDescription {
    pub container_instance_arn: ContainerInstanceArn,
    pub ec2_instance_id: Ec2InstanceId,
}

/// ECS reports ARNs it could not describe instead of failing the call
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Failure {
    #[serde(default)]
    pub arn: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct DescribeInstancesResponse {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct Reservation {
    #[serde(default)]
    pub instances: Vec<InstanceDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct InstanceDescription {
    pub instance_id: Ec2InstanceId,
    #[serde(default)]
    pub public_ip_address: Option<String>,
    #[serde(default)]
    pub private_ip_address: Option<String>,
}

impl From<TaskDescription> for Task {
    fn from(t: TaskDescription) -> Self {
        Task {
            task_arn: t.task_arn,
            container_instance_arn: t.container_instance_arn,
            containers: t
                .containers
                .into_iter()
                .map(|c| Container { name: c.name })
                .collect(),
        }
    }
}

impl From<ContainerInstanceDescription> for ContainerInstance {
    fn from(c: ContainerInstanceDescription) -> Self {
        ContainerInstance {
            container_instance_arn: c.container_instance_arn,
            ec2_instance_id: c.ec2_instance_id,
        }
    }
}

impl From<InstanceDescription> for Instance {
    fn from(i: InstanceDescription) -> Self {
        Instance {
            instance_id: i.instance_id,
            public_ip_address: i.public_ip_address,
            private_ip_address: i.private_ip_address,
        }
    }
}

impl DescribeInstancesResponse {
    /// Reservations flattened into a single instance list
    pub fn into_instances(self) -> Vec<Instance> {
        self.reservations
            .into_iter()
            .flat_map(|r| r.instances)
            .map(Instance::from)
            .collect()
    }
}
