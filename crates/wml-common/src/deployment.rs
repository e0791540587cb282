use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error_body::ApiErrorBody;
use crate::metadata::{HardwareSpecRel, Rel, Resource, StatusMessage};

pub type Deployment = Resource<DeploymentEntity>;

/// Lifecycle state of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    Initializing,
    Updating,
    Ready,
    Failed,
    /// States this client does not know about yet.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<DeploymentState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<StatusMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<ApiErrorBody>,

    /// URLs an online deployment can be scored at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_urls: Option<Vec<String>>,
}

/// Marker block selecting an online deployment; `parameters` are passed to
/// the serving runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnlineDeployment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// Marker block selecting a batch deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchDeployment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentEntity {
    /// The deployed asset (model or function).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_asset_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_spec: Option<HardwareSpecRel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<OnlineDeployment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<BatchDeployment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeploymentStatus>,
}

/// Create body for `POST /v4/deployments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentRequest {
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
    pub asset: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_spec: Option<HardwareSpecRel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<OnlineDeployment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<BatchDeployment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl DeploymentRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            asset: None,
            hardware_spec: None,
            online: None,
            batch: None,
            custom: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_deployment_document() {
        let dep: Deployment = serde_json::from_str(
            r#"{
                "metadata": {
                    "id": "9c4e8f2a",
                    "name": "churn-online",
                    "created_at": "2024-03-01T10:15:00.000Z",
                    "space_id": "sp-1"
                },
                "entity": {
                    "asset": {"id": "model-1"},
                    "deployed_asset_type": "model",
                    "online": {},
                    "status": {
                        "state": "ready",
                        "serving_urls": ["https://host/ml/v4/deployments/9c4e8f2a/predictions"]
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(dep.metadata.id, "9c4e8f2a");
        assert_eq!(dep.metadata.space_id.as_deref(), Some("sp-1"));
        let status = dep.entity.status.unwrap();
        assert_eq!(status.state, Some(DeploymentState::Ready));
        assert_eq!(status.serving_urls.unwrap().len(), 1);
    }

    #[test]
    fn unknown_state_degrades() {
        let status: DeploymentStatus =
            serde_json::from_str(r#"{"state": "hibernating"}"#).unwrap();
        assert_eq!(status.state, Some(DeploymentState::Other));
    }
}
