use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::Resource;

pub type Pipeline = Resource<PipelineEntity>;

/// A pipeline is an opaque flow document plus user extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRequest {
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
    pub document: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl PipelineRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            document: None,
            custom: None,
        }
    }
}
