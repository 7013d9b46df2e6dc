//! AWS access
//!
//! `ClusterApi` is the seam discovery talks to. The shipped adapter drives
//! the `aws` CLI; tests substitute an in-memory fake.

mod cli;
mod responses;

pub use cli::{AwsCli, DESCRIBE_BATCH_LIMIT};

use crate::error::FacilitateResult;
use crate::models::{ContainerInstance, ContainerInstanceArn, Ec2InstanceId, Instance, Task, TaskArn};

/// The four ECS/EC2 reads `ecs exec` needs
pub trait ClusterApi {
    /// ARNs of RUNNING tasks with the EC2 launch type
    fn list_tasks(
        &self,
        cluster: Option<&str>,
        service: Option<&str>,
    ) -> FacilitateResult<Vec<TaskArn>>;

    fn describe_tasks(&self, cluster: Option<&str>, tasks: &[TaskArn])
        -> FacilitateResult<Vec<Task>>;

    fn describe_container_instances(
        &self,
        cluster: Option<&str>,
        arns: &[ContainerInstanceArn],
    ) -> FacilitateResult<Vec<ContainerInstance>>;

    fn describe_instances(&self, ids: &[Ec2InstanceId]) -> FacilitateResult<Vec<Instance>>;
}

impl<T: ClusterApi + ?Sized> ClusterApi for &T {
    fn list_tasks(
        &self,
        cluster: Option<&str>,
        service: Option<&str>,
    ) -> FacilitateResult<Vec<TaskArn>> {
        (**self).list_tasks(cluster, service)
    }

    fn describe_tasks(
        &self,
        cluster: Option<&str>,
        tasks: &[TaskArn],
    ) -> FacilitateResult<Vec<Task>> {
        (**self).describe_tasks(cluster, tasks)
    }

    fn describe_container_instances(
        &self,
        cluster: Option<&str>,
        arns: &[ContainerInstanceArn],
    ) -> FacilitateResult<Vec<ContainerInstance>> {
        (**self).describe_container_instances(cluster, arns)
    }

    fn describe_instances(&self, ids: &[Ec2InstanceId]) -> FacilitateResult<Vec<Instance>> {
        (**self).describe_instances(ids)
    }
}
