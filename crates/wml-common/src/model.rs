use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::{DataConnectionRef, Rel, Resource, SoftwareSpecRel};

pub type Model = Resource<ModelEntity>;

/// Schema of one input or output table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSchema {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub fields: Vec<Value>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSchemas {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<DataSchema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<DataSchema>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSize {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_memory: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntity {
    /// Model format and framework, e.g. `tensorflow_2.4` or `scikit-learn_1.1`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_spec: Option<SoftwareSpecRel>,

    /// Pipeline the model was trained by, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_definition: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyper_parameters: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_references: Option<Vec<DataConnectionRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemas: Option<ModelSchemas>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_column: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ModelSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_import_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

/// Create body for `POST /v4/models`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRequest {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_spec: Option<SoftwareSpecRel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_definition: Option<Rel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_references: Option<Vec<DataConnectionRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemas: Option<ModelSchemas>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_column: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl ModelRequest {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            software_spec: None,
            pipeline: None,
            model_definition: None,
            training_data_references: None,
            schemas: None,
            label_column: None,
            custom: None,
        }
    }
}

/// Metadata describing an uploaded content attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMetadata {
    pub attachment_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persisted: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_request_omits_unset_fields() {
        let req = ModelRequest::new("churn", "scikit-learn_1.1");
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({"name": "churn", "type": "scikit-learn_1.1"})
        );
    }
}
