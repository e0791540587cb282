use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::{DataConnectionRef, Rel, Resource};
use crate::training::TrainingPipelineRef;

pub type TrainingDefinition = Resource<TrainingDefinitionEntity>;

/// A stored, re-runnable training configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingDefinitionEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<TrainingPipelineRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_definition: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_references: Option<Vec<DataConnectionRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_reference: Option<DataConnectionRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingDefinitionRequest {
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
    pub pipeline: Option<TrainingPipelineRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_definition: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_references: Option<Vec<DataConnectionRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_reference: Option<DataConnectionRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl TrainingDefinitionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            pipeline: None,
            model_definition: None,
            experiment: None,
            training_data_references: None,
            results_reference: None,
            custom: None,
        }
    }
}
