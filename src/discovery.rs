//! Resolve a container name to the EC2 hosts running it
//!
//! tasks → container instances → EC2 instance ids → addresses. Each step
//! reports through [`Progress`] and lists what it found.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::aws::ClusterApi;
use crate::error::{FacilitateError, FacilitateResult};
use crate::models::{AddressKind, ContainerInstanceArn, Ec2InstanceId, Target, TaskArn};

/// Step reporting for long-running lookups
pub trait Progress {
    /// A step started
    fn begin(&mut self, message: &str);
    /// The current step finished
    fn succeed(&mut self, message: &str);
    /// The current step failed
    fn fail(&mut self, message: &str);
    /// One result line of the last finished step
    fn item(&mut self, item: &str);
}

/// Progress sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn begin(&mut self, _message: &str) {}
    fn succeed(&mut self, _message: &str) {}
    fn fail(&mut self, _message: &str) {}
    fn item(&mut self, _item: &str) {}
}

/// Cluster scope of a lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub cluster: Option<String>,
    pub service: Option<String>,
}

impl Scope {
    pub fn new(cluster: Option<String>, service: Option<String>) -> Self {
        Self { cluster, service }
    }

    fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref()
    }
}

pub struct Discovery<C, P> {
    api: C,
    progress: P,
    address_kind: AddressKind,
}

impl<C: ClusterApi, P: Progress> Discovery<C, P> {
    pub fn new(api: C, progress: P) -> Self {
        Self {
            api,
            progress,
            address_kind: AddressKind::Public,
        }
    }

    pub fn with_address_kind(mut self, kind: AddressKind) -> Self {
        self.address_kind = kind;
        self
    }

    pub fn into_progress(self) -> P {
        self.progress
    }

    /// Run every step and return the hosts the container runs on
    pub fn resolve(&mut self, scope: &Scope, container: &str) -> FacilitateResult<Vec<Target>> {
        let tasks = self.task_arns(scope)?;
        let instance_arns = self.container_instance_arns(scope, &tasks, container)?;
        let instance_ids = self.instance_ids(scope, &instance_arns)?;
        self.targets(&instance_ids)
    }

    /// ARNs of running EC2 tasks in scope
    pub fn task_arns(&mut self, scope: &Scope) -> FacilitateResult<Vec<TaskArn>> {
        self.step(
            "Obtaining ARNs of running ECS tasks with EC2 launch type",
            |api| {
                let arns = dedup(api.list_tasks(scope.cluster(), scope.service.as_deref())?);
                if arns.is_empty() {
                    return Err(FacilitateError::NoRunningTasks {
                        cluster: scope.cluster.clone(),
                        service: scope.service.clone(),
                    });
                }
                Ok(arns)
            },
        )
    }

    /// Container instances hosting a task that holds `container`
    pub fn container_instance_arns(
        &mut self,
        scope: &Scope,
        tasks: &[TaskArn],
        container: &str,
    ) -> FacilitateResult<Vec<ContainerInstanceArn>> {
        self.step("Obtaining container instance ARNs", |api| {
            let described = api.describe_tasks(scope.cluster(), tasks)?;
            let matching: Vec<_> = described
                .into_iter()
                .filter(|t| t.has_container(container))
                .collect();
            if matching.is_empty() {
                return Err(FacilitateError::ContainerNotFound {
                    container: container.to_string(),
                });
            }

            let arns = dedup(matching.into_iter().filter_map(|t| {
                if t.container_instance_arn.is_none() {
                    debug!(task = %t.task_arn, "task has no container instance");
                }
                t.container_instance_arn
            }));
            if arns.is_empty() {
                return Err(FacilitateError::NoContainerInstances);
            }
            Ok(arns)
        })
    }

    /// EC2 instance ids behind the container instances
    pub fn instance_ids(
        &mut self,
        scope: &Scope,
        arns: &[ContainerInstanceArn],
    ) -> FacilitateResult<Vec<Ec2InstanceId>> {
        self.step("Obtaining container instance IDs", |api| {
            let described = api.describe_container_instances(scope.cluster(), arns)?;
            let ids = dedup(described.into_iter().map(|c| c.ec2_instance_id));
            if ids.is_empty() {
                return Err(FacilitateError::NoContainerInstances);
            }
            Ok(ids)
        })
    }

    /// Connectable addresses of the instances, in instance-id order
    pub fn targets(&mut self, ids: &[Ec2InstanceId]) -> FacilitateResult<Vec<Target>> {
        let kind = self.address_kind;
        self.step("Obtaining container instance IP addresses", |api| {
            let instances = api.describe_instances(ids)?;
            let mut targets = Vec::with_capacity(ids.len());
            for id in ids {
                let Some(instance) = instances.iter().find(|i| &i.instance_id == id) else {
                    warn!(instance = %id, "instance missing from describe-instances");
                    continue;
                };
                match kind.pick(instance) {
                    Some(address) => targets.push(Target {
                        instance_id: id.clone(),
                        address: address.to_string(),
                    }),
                    None => warn!(
                        instance = %id,
                        "instance has no {} IP address, skipping",
                        kind.label()
                    ),
                }
            }
            if targets.is_empty() {
                return Err(FacilitateError::NoReachableInstances {
                    address_kind: kind.label(),
                });
            }
            Ok(targets)
        })
    }

    fn step<T: std::fmt::Display>(
        &mut self,
        message: &str,
        run: impl FnOnce(&C) -> FacilitateResult<Vec<T>>,
    ) -> FacilitateResult<Vec<T>> {
        self.progress.begin(message);
        match run(&self.api) {
            Ok(items) => {
                self.progress.succeed(message);
                for item in &items {
                    self.progress.item(&item.to_string());
                }
                Ok(items)
            }
            Err(err) => {
                self.progress.fail(message);
                Err(err)
            }
        }
    }
}

/// Drop repeats, keeping first-seen order
fn dedup<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
