use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error_body::ApiErrorBody;
use crate::metadata::{DataConnectionRef, HardwareSpecRel, Rel, Resource, StatusMessage};
use crate::scoring::ScoringInput;

pub type DeploymentJob = Resource<DeploymentJobEntity>;
pub type JobDefinition = Resource<JobDefinitionEntity>;

/// Lifecycle state of a batch deployment job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Queued,
    Running,
    Completed,
    Failed,
    Canceled,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<JobState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<StatusMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<ApiErrorBody>,
}

/// Batch scoring section of a deployment job: inline rows, data references,
/// or both; results land in `output_data_reference`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobScoring {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data: Option<Vec<ScoringInput>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data_references: Option<Vec<DataConnectionRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_data_reference: Option<DataConnectionRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

/// Ids of the platform job backing an async run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentJobEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_spec: Option<HardwareSpecRel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<JobScoring>,

    /// Decision optimization payload, passed through opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_optimization: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_job: Option<PlatformJob>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

/// Create body for `POST /v4/deployment_jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentJobRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    pub deployment: Rel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_spec: Option<HardwareSpecRel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<JobScoring>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_optimization: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl DeploymentJobRequest {
    pub fn new(deployment: Rel) -> Self {
        Self {
            name: None,
            space_id: None,
            project_id: None,
            deployment,
            hardware_spec: None,
            scoring: None,
            decision_optimization: None,
            custom: None,
        }
    }
}

/// A stored job configuration that deployments can be run against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDefinitionEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<JobScoring>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_optimization: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDefinitionRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<JobScoring>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_optimization: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl JobDefinitionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            deployment: None,
            scoring: None,
            decision_optimization: None,
            custom: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_job_with_scoring_status() {
        let job: DeploymentJob = serde_json::from_str(
            r#"{
                "metadata": {"id": "job-7", "space_id": "sp-1"},
                "entity": {
                    "deployment": {"id": "dep-3"},
                    "scoring": {
                        "input_data_references": [
                            {"type": "connection_asset", "location": {"bucket": "in"}}
                        ],
                        "output_data_reference": {"type": "connection_asset"},
                        "status": {"state": "running", "running_at": "2024-05-01T12:00:00Z"}
                    },
                    "platform_job": {"job_id": "pj-1", "run_id": "r-1"}
                }
            }"#,
        )
        .unwrap();
        let scoring = job.entity.scoring.unwrap();
        assert_eq!(scoring.status.unwrap().state, Some(JobState::Running));
        assert_eq!(job.entity.platform_job.unwrap().run_id.as_deref(), Some("r-1"));
    }
}
