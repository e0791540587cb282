use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::{DataConnectionRef, Rel, Resource};

pub type Experiment = Resource<ExperimentEntity>;

/// How trained models produced by the experiment are compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default)]
    pub metrics: Vec<Value>,
}

/// One training the experiment runs, by pipeline or model definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_definition: Option<Rel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_definition: Option<EvaluationDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_references: Option<Vec<TrainingReference>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_references: Option<Vec<DataConnectionRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentRequest {
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
    pub evaluation_definition: Option<EvaluationDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_references: Option<Vec<TrainingReference>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl ExperimentRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            evaluation_definition: None,
            training_references: None,
            custom: None,
        }
    }
}
