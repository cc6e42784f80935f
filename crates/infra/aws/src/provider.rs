use async_trait::async_trait;
use ec2ctl_core::{
    cloud_provider::CloudProvider,
    error::{ComputeError, Result},
    instance::InstanceInfo,
};
use tokio::process::Command;
use tracing::debug;

use crate::instance::DescribeInstancesResponse;

/// EC2 operations backed by the external `aws` binary. Credential and region
/// configuration is entirely the binary's own; nothing is passed through.
pub struct AwsCliProvider {
    program: String,
}

impl AwsCliProvider {
    pub fn new() -> Self {
        Self::with_program("aws")
    }

    /// Substitute another binary for `aws`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run_action(&self, action: &str, instance_id: &str) -> Result<String> {
        debug!(
            "Executing: {} ec2 {} --instance-ids {}",
            self.program, action, instance_id
        );

        let output = Command::new(&self.program)
            .args(["ec2", action, "--instance-ids", instance_id])
            .output()
            .await
            .map_err(|error| ComputeError::CommandFailed {
                reason: error.to_string(),
            })?;

        let combined = combined_output(&output);
        if !output.status.success() {
            return Err(ComputeError::ActionFailed {
                action: action.to_string(),
                instance_id: instance_id.to_string(),
                output: combined,
            }
            .into());
        }
        Ok(combined)
    }
}

impl Default for AwsCliProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CloudProvider for AwsCliProvider {
    async fn list_instances(&self) -> Result<Vec<InstanceInfo>> {
        debug!(
            "Executing: {} ec2 describe-instances --output json",
            self.program
        );

        let output = Command::new(&self.program)
            .args(["ec2", "describe-instances", "--output", "json"])
            .output()
            .await
            .map_err(|error| ComputeError::CommandFailed {
                reason: error.to_string(),
            })?;

        if !output.status.success() {
            return Err(ComputeError::CommandFailed {
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let response: DescribeInstancesResponse = serde_json::from_slice(&output.stdout)
            .map_err(|error| ComputeError::MalformedResponse {
                reason: error.to_string(),
            })?;

        Ok(response.into_instances())
    }

    async fn start_instance(&self, instance_id: &str) -> Result<String> {
        self.run_action("start-instances", instance_id).await
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<String> {
        self.run_action("stop-instances", instance_id).await
    }
}

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}
