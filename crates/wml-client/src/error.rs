use wml_common::ApiErrorBody;

pub type Result<T, E = WmlError> = std::result::Result<T, E>;

/// Errors surfaced by the client.
///
/// Non-2xx responses become [`WmlError::Api`] with the service's own error
/// document attached when it could be parsed; the raw body text is kept
/// either way.
#[derive(Debug, thiserror::Error)]
pub enum WmlError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api error (status {status}): {}", api_summary(.body, .text))]
    Api {
        status: u16,
        body: ApiErrorBody,
        text: String,
    },

    #[error("pager is exhausted")]
    PagerExhausted,
}

impl WmlError {
    /// HTTP status of an API failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            WmlError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Request trace id from the service error document.
    pub fn trace(&self) -> Option<&str> {
        match self {
            WmlError::Api { body, .. } => body.trace.as_deref(),
            _ => None,
        }
    }
}

fn api_summary(body: &ApiErrorBody, text: &str) -> String {
    match body.errors.first() {
        Some(err) => format!("{}: {}", err.code, err.message),
        None if text.is_empty() => "no error body".to_string(),
        None => text.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wml_common::ApiError;

    #[test]
    fn api_error_display_and_accessors() {
        let err = WmlError::Api {
            status: 404,
            body: ApiErrorBody {
                trace: Some("abc123".to_string()),
                errors: vec![ApiError {
                    code: "model_not_found".to_string(),
                    message: "Model 'x' does not exist.".to_string(),
                    more_info: None,
                }],
            },
            text: String::new(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.trace(), Some("abc123"));
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("model_not_found"));
    }

    #[test]
    fn api_error_without_body_keeps_text() {
        let err = WmlError::Api {
            status: 502,
            body: ApiErrorBody::default(),
            text: "bad gateway".to_string(),
        };
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("bad gateway"));
    }
}
