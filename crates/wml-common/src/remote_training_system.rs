use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::Resource;

pub type RemoteTrainingSystem = Resource<RemoteTrainingSystemEntity>;

/// An identity allowed to register a remote training system, or to
/// administer it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteIdentity {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteTrainingSystemEntity {
    #[serde(default)]
    pub allowed_identities: Vec<RemoteIdentity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_admin: Option<RemoteIdentity>,

    /// Connector-specific data handler configuration, passed through opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_handler: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteTrainingSystemRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    pub allowed_identities: Vec<RemoteIdentity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_admin: Option<RemoteIdentity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_handler: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl RemoteTrainingSystemRequest {
    pub fn new(name: impl Into<String>, allowed_identities: Vec<RemoteIdentity>) -> Self {
        Self {
            name: name.into(),
            space_id: None,
            project_id: None,
            description: None,
            tags: None,
            allowed_identities,
            remote_admin: None,
            data_handler: None,
            custom: None,
        }
    }
}
