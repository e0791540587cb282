use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error_body::ApiErrorBody;
use crate::metadata::{DataConnectionRef, HardwareSpecRel, Rel, Resource, StatusMessage};

pub type Training = Resource<TrainingEntity>;

/// Lifecycle state of a training run.
///
/// `delete` with `hard_delete=false` moves a running training to `canceled`;
/// completed runs keep their terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingState {
    Queued,
    Pending,
    Running,
    Storing,
    Completed,
    Failed,
    Canceled,
    #[serde(other)]
    Other,
}

impl TrainingState {
    /// Whether the run can still change state on its own.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            TrainingState::Queued
                | TrainingState::Pending
                | TrainingState::Running
                | TrainingState::Storing
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStatus {
    pub state: TrainingState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<StatusMessage>,

    /// Evaluation metrics emitted while training, schema depends on the
    /// framework.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<ApiErrorBody>,
}

/// Pipeline reference used by a training, with optional hardware override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPipelineRef {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_spec: Option<HardwareSpecRel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<TrainingPipelineRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_definition: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_references: Option<Vec<DataConnectionRef>>,

    /// Where results (the trained model content, logs) are written.
    pub results_reference: DataConnectionRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

/// Create body for `POST /v4/trainings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<TrainingPipelineRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_definition: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_references: Option<Vec<DataConnectionRef>>,

    pub results_reference: DataConnectionRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl TrainingRequest {
    pub fn new(results_reference: DataConnectionRef) -> Self {
        Self {
            name: None,
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            pipeline: None,
            model_definition: None,
            experiment: None,
            training_data_references: None,
            results_reference,
            custom: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_training_status() {
        let status: TrainingStatus = serde_json::from_str(
            r#"{
                "state": "completed",
                "running_at": "2024-02-10T08:00:00.000Z",
                "completed_at": "2024-02-10T09:30:00.000Z",
                "metrics": [{"ml_metrics": {"accuracy": 0.92}}]
            }"#,
        )
        .unwrap();
        assert_eq!(status.state, TrainingState::Completed);
        assert!(!status.state.is_active());
        assert_eq!(status.metrics.unwrap().len(), 1);
    }

    #[test]
    fn unknown_training_state_degrades() {
        let status: TrainingStatus =
            serde_json::from_str(r#"{"state": "paused_for_review"}"#).unwrap();
        assert_eq!(status.state, TrainingState::Other);
    }

    #[test]
    fn active_states() {
        for state in [
            TrainingState::Queued,
            TrainingState::Pending,
            TrainingState::Running,
            TrainingState::Storing,
        ] {
            assert!(state.is_active());
        }
        for state in [
            TrainingState::Completed,
            TrainingState::Failed,
            TrainingState::Canceled,
            TrainingState::Other,
        ] {
            assert!(!state.is_active());
        }
    }
}
