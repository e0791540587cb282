use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One input table for scoring: column names plus row-major values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    pub values: Vec<Vec<Value>>,
}

impl ScoringInput {
    pub fn new(values: Vec<Vec<Value>>) -> Self {
        Self {
            id: None,
            name: None,
            fields: None,
            values,
        }
    }
}

/// Body of a synchronous `POST /v4/deployments/{id}/predictions` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncScoringPayload {
    pub input_data: Vec<ScoringInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncScoringResult {
    pub predictions: Vec<ScoringOutput>,
}
