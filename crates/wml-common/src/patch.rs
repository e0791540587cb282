use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RFC 6902 patch operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// A single RFC 6902 JSON patch operation, as accepted by the PATCH
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    pub op: PatchOp,
    pub path: String,

    /// Source path for `move` / `copy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl JsonPatchOperation {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Add,
            path: path.into(),
            from: None,
            value: Some(value),
        }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            from: None,
            value: Some(value),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            from: None,
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_wire_format() {
        let ops = vec![
            JsonPatchOperation::replace("/name", json!("tuned-model")),
            JsonPatchOperation::add("/tags/-", json!("prod")),
            JsonPatchOperation::remove("/description"),
        ];
        let wire = serde_json::to_value(&ops).unwrap();
        assert_eq!(
            wire,
            json!([
                {"op": "replace", "path": "/name", "value": "tuned-model"},
                {"op": "add", "path": "/tags/-", "value": "prod"},
                {"op": "remove", "path": "/description"}
            ])
        );
    }

    #[test]
    fn patch_roundtrip_with_from() {
        let op: JsonPatchOperation =
            serde_json::from_value(json!({"op": "move", "path": "/a", "from": "/b"})).unwrap();
        assert_eq!(op.op, PatchOp::Move);
        assert_eq!(op.from.as_deref(), Some("/b"));
        assert!(op.value.is_none());
    }
}
