use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::{Resource, SoftwareSpecRel};
use crate::model::ModelSchemas;

pub type Function = Resource<FunctionEntity>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionEntity {
    /// Function runtime, currently always `python`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_spec: Option<SoftwareSpecRel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_scoring_input: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemas: Option<ModelSchemas>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_spec: Option<SoftwareSpecRel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl FunctionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            kind: None,
            software_spec: None,
            custom: None,
        }
    }
}
