//! Shared helpers for integration tests
//!
//! Every run gets its own config/home directory and a scripted stand-in for
//! the `aws` executable, so no test touches a real account.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Variables from the developer's shell that would change behavior
const SCRUBBED_ENV: &[&str] = &[
    "FACILITATE_CONFIG",
    "FACILITATE_CLUSTER",
    "FACILITATE_SERVICE",
    "FACILITATE_USER",
    "FACILITATE_IDENTITY_FILE",
    "FACILITATE_AWS_BIN",
    "FACILITATE_AWS_PROFILE",
    "FACILITATE_AWS_REGION",
    "FACILITATE_SSH_BIN",
    "FACILITATE_COLOR",
    "FACILITATE_LOG",
    "RUST_LOG",
];

/// Three running tasks: two `web` tasks on separate hosts, one `worker`
/// task sharing the second host.
pub const FAKE_AWS: &str = r#"#!/bin/sh
if [ -n "$FAKE_AWS_LOG" ]; then
  echo "$@" >> "$FAKE_AWS_LOG"
fi
case "$2" in
  list-tasks)
    if [ -n "$FAKE_AWS_EMPTY" ]; then
      echo '{"taskArns": []}'
      exit 0
    fi
    echo '{"taskArns": ["arn:task/t1", "arn:task/t2", "arn:task/t3"]}'
    ;;
  describe-tasks)
    cat <<'JSON'
{"tasks": [
  {"taskArn": "arn:task/t1", "containerInstanceArn": "arn:ci/a", "containers": [{"name": "web"}, {"name": "sidecar"}]},
  {"taskArn": "arn:task/t2", "containerInstanceArn": "arn:ci/b", "containers": [{"name": "web"}]},
  {"taskArn": "arn:task/t3", "containerInstanceArn": "arn:ci/b", "containers": [{"name": "worker"}]}
], "failures": []}
JSON
    ;;
  describe-container-instances)
    out=""
    for arg in "$@"; do
      case "$arg" in
        arn:ci/a) out="$out,{\"containerInstanceArn\": \"arn:ci/a\", \"ec2InstanceId\": \"i-a\"}" ;;
        arn:ci/b) out="$out,{\"containerInstanceArn\": \"arn:ci/b\", \"ec2InstanceId\": \"i-b\"}" ;;
      esac
    done
    echo "{\"containerInstances\": [${out#,}], \"failures\": []}"
    ;;
  describe-instances)
    cat <<'JSON'
{"Reservations": [{"Instances": [
  {"InstanceId": "i-a", "PublicIpAddress": "3.3.3.1", "PrivateIpAddress": "10.0.0.1"},
  {"InstanceId": "i-b", "PublicIpAddress": "3.3.3.2", "PrivateIpAddress": "10.0.0.2"}
]}]}
JSON
    ;;
  *)
    echo "unexpected call: $*" >&2
    exit 254
    ;;
esac
"#;

pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    root: TempDir,
    bin: PathBuf,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("home")).expect("Failed to create home");
        std::fs::create_dir_all(root.path().join("config")).expect("Failed to create config");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_facilitate")),
            env: Vec::new(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn set_env(&mut self, key: &str, value: impl AsRef<Path>) {
        self.env.push((
            key.to_string(),
            value.as_ref().to_string_lossy().into_owned(),
        ));
    }

    /// Install the scripted `aws` and log its invocations to `aws.log`
    #[cfg(unix)]
    pub fn with_fake_aws(mut self) -> Self {
        let script = self.write_script("bin/aws", FAKE_AWS);
        let log = self.path("aws.log");
        self.set_env("FACILITATE_AWS_BIN", script);
        self.set_env("FAKE_AWS_LOG", log);
        self
    }

    /// Install an `ssh` that records its argv and exits with `code`
    #[cfg(unix)]
    pub fn with_fake_ssh(mut self, code: i32) -> Self {
        let body = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do echo \"$arg\" >> \"{}\"; done\nexit {}\n",
            self.path("ssh.log").display(),
            code
        );
        let script = self.write_script("bin/ssh", &body);
        self.set_env("FACILITATE_SSH_BIN", script);
        self
    }

    #[cfg(unix)]
    pub fn write_script(&self, relative: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, body).expect("Failed to write script");
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }

    /// Write `$XDG_CONFIG_HOME/facilitate/config.toml`
    pub fn write_config(&self, content: &str) {
        let path = self.path("config/facilitate/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create directories");
        std::fs::write(&path, content).expect("Failed to write config");
    }

    pub fn read_log(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).unwrap_or_default()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.path("home"))
            .env("XDG_CONFIG_HOME", self.path("config"))
            .env("NO_COLOR", "1");

        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute facilitate");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
