use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Common metadata block carried by every Watson ML resource.
///
/// Returned under the `metadata` key of each resource document; only `id` is
/// guaranteed to be present on all resource kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMeta {
    pub id: String,

    /// Revision id, present on revisioned resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Exactly one of `space_id` / `project_id` is set, depending on the
    /// scope the resource lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_info: Option<CommitInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}

/// A resource document: `metadata` plus a kind-specific `entity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<E> {
    pub metadata: ResourceMeta,
    pub entity: E,

    /// Service-side warnings attached to the response, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Reference to another resource by id, optionally pinned to a revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rel {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
}

impl Rel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rev: None,
        }
    }
}

/// Hardware specification reference (by id or by name).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HardwareSpecRel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_nodes: Option<u32>,
}

/// Software specification reference (by id or by name).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoftwareSpecRel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Reference to data held in an external connection (COS bucket, data asset,
/// etc.). The `connection` and `location` payloads are connector-specific and
/// passed through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConnectionRef {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
}

impl DataConnectionRef {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            connection: None,
            location: None,
        }
    }
}

/// Human-readable status message attached to a resource status block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
