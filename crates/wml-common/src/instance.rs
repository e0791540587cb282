use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::Resource;

pub type Instance = Resource<InstanceEntity>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstancePlan {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A provisioned service instance and its plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<InstancePlan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    /// Plan usage counters (capacity unit hours etc.), schema varies by plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_info: Option<Value>,
}
