//! Authentication applied to outgoing requests.
//!
//! Token acquisition and refresh (IAM) are out of scope here; callers hand
//! the client a ready-to-use credential.

/// Credential attached to every request.
#[derive(Debug, Clone)]
pub enum AuthProvider {
    /// `Authorization: Bearer <token>` (IAM access token).
    BearerToken(String),

    /// `Authorization: ApiKey <key>`, for gateways that accept raw keys.
    ApiKeyHeader(String),

    /// No authentication header.
    None,
}

impl AuthProvider {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::BearerToken(token.into())
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKeyHeader(key.into())
    }

    pub fn none() -> Self {
        Self::None
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Attach the credential to a request builder.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::BearerToken(token) => request.bearer_auth(token),
            Self::ApiKeyHeader(key) => request.header("Authorization", format!("ApiKey {key}")),
            Self::None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_is_set() {
        let client = reqwest::Client::new();
        let req = AuthProvider::bearer("tok-1")
            .apply(client.get("http://localhost/v4/models"))
            .build()
            .unwrap();
        assert_eq!(
            req.headers().get("authorization").unwrap().to_str().unwrap(),
            "Bearer tok-1"
        );
    }

    #[test]
    fn api_key_header_is_set() {
        let client = reqwest::Client::new();
        let req = AuthProvider::api_key("k-9")
            .apply(client.get("http://localhost/v4/models"))
            .build()
            .unwrap();
        assert_eq!(
            req.headers().get("authorization").unwrap().to_str().unwrap(),
            "ApiKey k-9"
        );
    }

    #[test]
    fn none_leaves_request_untouched() {
        let client = reqwest::Client::new();
        let req = AuthProvider::none()
            .apply(client.get("http://localhost/v4/models"))
            .build()
            .unwrap();
        assert!(req.headers().get("authorization").is_none());
        assert!(!AuthProvider::none().is_authenticated());
    }
}
