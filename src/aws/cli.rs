//! `ClusterApi` backed by the `aws` command-line tool
//!
//! Every call runs `aws <service> <operation> ... --output json` and decodes
//! stdout. The CLI already follows `nextToken` pagination for list calls.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::responses::{
    DescribeContainerInstancesResponse, DescribeInstancesResponse, DescribeTasksResponse, Failure,
    ListTasksResponse,
};
use super::ClusterApi;
use crate::config::AwsConfig;
use crate::error::{FacilitateError, FacilitateResult};
use crate::models::{ContainerInstance, ContainerInstanceArn, Ec2InstanceId, Instance, Task, TaskArn};

/// Max identifiers ECS accepts in one `describe-*` call
pub const DESCRIBE_BATCH_LIMIT: usize = 100;

/// Runs the `aws` executable
#[derive(Debug, Clone)]
pub struct AwsCli {
    bin: String,
    profile: Option<String>,
    region: Option<String>,
}

impl AwsCli {
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            profile: None,
            region: None,
        }
    }

    pub fn from_config(config: &AwsConfig) -> Self {
        Self {
            bin: config.bin.clone(),
            profile: config.profile.clone(),
            region: config.region.clone(),
        }
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    /// Full argument list (without the program) for one call
    fn args(&self, service: &str, operation: &str, params: Vec<String>) -> Vec<String> {
        let mut args = vec![service.to_string(), operation.to_string()];
        args.extend(params);
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        if let Some(region) = &self.region {
            args.push("--region".to_string());
            args.push(region.clone());
        }
        args.push("--output".to_string());
        args.push("json".to_string());
        args
    }

    fn list_tasks_params(cluster: Option<&str>, service: Option<&str>) -> Vec<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "--cluster", cluster);
        push_opt(&mut params, "--service-name", service);
        params.extend(
            ["--desired-status", "RUNNING", "--launch-type", "EC2"]
                .iter()
                .map(|s| s.to_string()),
        );
        params
    }

    fn id_list_params<'a>(
        cluster: Option<&str>,
        flag: &str,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> Vec<String> {
        let mut params = Vec::new();
        push_opt(&mut params, "--cluster", cluster);
        params.push(flag.to_string());
        params.extend(ids.into_iter().map(str::to_string));
        params
    }

    fn call<T: DeserializeOwned>(
        &self,
        service: &str,
        operation: &str,
        params: Vec<String>,
    ) -> FacilitateResult<T> {
        let args = self.args(service, operation, params);
        let display = format!("aws {} {}", service, operation);
        debug!(bin = %self.bin, args = ?args, "running aws cli");

        let output = Command::new(&self.bin)
            .args(&args)
            .env("AWS_PAGER", "")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FacilitateError::AwsCliNotFound {
                    bin: self.bin.clone(),
                },
                _ => FacilitateError::Io(e),
            })?;

        if !output.status.success() {
            return Err(FacilitateError::AwsCommandFailed {
                command: display,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| FacilitateError::InvalidAwsResponse {
            command: display,
            message: e.to_string(),
        })
    }
}

fn push_opt(params: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        params.push(flag.to_string());
        params.push(value.to_string());
    }
}

fn log_failures(operation: &str, failures: &[Failure]) {
    for failure in failures {
        warn!(
            operation,
            arn = failure.arn.as_deref().unwrap_or("?"),
            reason = failure.reason.as_deref().unwrap_or("?"),
            "ECS could not describe resource"
        );
    }
}

impl ClusterApi for AwsCli {
    fn list_tasks(
        &self,
        cluster: Option<&str>,
        service: Option<&str>,
    ) -> FacilitateResult<Vec<TaskArn>> {
        let response: ListTasksResponse =
            self.call("ecs", "list-tasks", Self::list_tasks_params(cluster, service))?;
        Ok(response.task_arns)
    }

    fn describe_tasks(
        &self,
        cluster: Option<&str>,
        tasks: &[TaskArn],
    ) -> FacilitateResult<Vec<Task>> {
        let mut described = Vec::with_capacity(tasks.len());
        for chunk in tasks.chunks(DESCRIBE_BATCH_LIMIT) {
            let params = Self::id_list_params(cluster, "--tasks", chunk.iter().map(TaskArn::as_str));
            let response: DescribeTasksResponse = self.call("ecs", "describe-tasks", params)?;
            log_failures("describe-tasks", &response.failures);
            described.extend(response.tasks.into_iter().map(Task::from));
        }
        Ok(described)
    }

    fn describe_container_instances(
        &self,
        cluster: Option<&str>,
        arns: &[ContainerInstanceArn],
    ) -> FacilitateResult<Vec<ContainerInstance>> {
        let mut described = Vec::with_capacity(arns.len());
        for chunk in arns.chunks(DESCRIBE_BATCH_LIMIT) {
            let params = Self::id_list_params(
                cluster,
                "--container-instances",
                chunk.iter().map(ContainerInstanceArn::as_str),
            );
            let response: DescribeContainerInstancesResponse =
                self.call("ecs", "describe-container-instances", params)?;
            log_failures("describe-container-instances", &response.failures);
            described.extend(
                response
                    .container_instances
                    .into_iter()
                    .map(ContainerInstance::from),
            );
        }
        Ok(described)
    }

    fn describe_instances(&self, ids: &[Ec2InstanceId]) -> FacilitateResult<Vec<Instance>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let params = Self::id_list_params(None, "--instance-ids", ids.iter().map(Ec2InstanceId::as_str));
        let response: DescribeInstancesResponse = self.call("ec2", "describe-instances", params)?;
        Ok(response.into_instances())
    }
}
