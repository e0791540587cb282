use serde::{Deserialize, Serialize};

/// Error document returned by the service on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Request trace id, for support tickets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,

    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_body() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{
                "trace": "3fd0b5b9c9b1a9c8",
                "errors": [
                    {"code": "deployment_not_found",
                     "message": "Deployment with id 'x' does not exist.",
                     "more_info": "https://cloud.ibm.com/apidocs/machine-learning"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(body.trace.as_deref(), Some("3fd0b5b9c9b1a9c8"));
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].code, "deployment_not_found");
    }
}
