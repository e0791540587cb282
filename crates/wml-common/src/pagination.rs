use serde::{Deserialize, Serialize};

/// A pagination link as returned under `first` / `next` in list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationLink {
    pub href: String,
}

/// One page of a paginated list response.
///
/// Every list endpoint returns this shape with a kind-specific `resources`
/// element type. The `next` link, when present, carries the `start` cursor
/// for the following page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCollection<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PaginationLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,

    #[serde(default)]
    pub resources: Vec<T>,
}

impl<T> ResourceCollection<T> {
    /// Cursor for the next page, extracted from the `next` link.
    ///
    /// Returns `None` when there is no `next` link or the link carries no
    /// `start` parameter, i.e. when the listing is exhausted.
    pub fn next_start(&self) -> Option<String> {
        self.next.as_ref().and_then(|link| start_param(&link.href))
    }
}

/// Extract the `start` query parameter from a pagination href.
///
/// The href is whatever the service put in the `next` link, e.g.
/// `https://host/ml/v4/trainings?version=2021-06-24&start=g1AAAAA...&limit=50`.
/// The cursor value is percent-decoded before being handed back so it can be
/// re-sent as a regular query parameter.
pub fn start_param(href: &str) -> Option<String> {
    let query = href.split_once('?')?.1;
    // Anchors are not expected on API links, but cheap to strip.
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if key == "start" && !value.is_empty() {
            return Some(percent_decode(value));
        }
    }
    None
}

fn percent_decode(value: &str) -> String {
    fn hex_digit(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(if bytes[i] == b'+' { b' ' } else { bytes[i] });
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_param_plain() {
        assert_eq!(
            start_param("https://host/ml/v4/models?start=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn start_param_among_others() {
        assert_eq!(
            start_param("https://host/ml/v4/trainings?version=2021-06-24&start=g1AAAA&limit=50"),
            Some("g1AAAA".to_string())
        );
        assert_eq!(
            start_param("/ml/v4/trainings?limit=50&start=last"),
            Some("last".to_string())
        );
    }

    #[test]
    fn start_param_percent_encoded() {
        assert_eq!(
            start_param("https://host/v4/models?start=a%2Bb%3D%3D&limit=10"),
            Some("a+b==".to_string())
        );
    }

    #[test]
    fn start_param_absent() {
        assert_eq!(start_param("https://host/ml/v4/models"), None);
        assert_eq!(start_param("https://host/ml/v4/models?limit=50"), None);
        assert_eq!(start_param("https://host/ml/v4/models?start="), None);
    }

    #[test]
    fn collection_next_start() {
        let page: ResourceCollection<serde_json::Value> = serde_json::from_str(
            r#"{
                "total_count": 120,
                "limit": 50,
                "first": {"href": "https://host/ml/v4/models?limit=50"},
                "next": {"href": "https://host/ml/v4/models?limit=50&start=cursor-2"},
                "resources": []
            }"#,
        )
        .unwrap();
        assert_eq!(page.next_start(), Some("cursor-2".to_string()));

        let last: ResourceCollection<serde_json::Value> =
            serde_json::from_str(r#"{"resources": []}"#).unwrap();
        assert_eq!(last.next_start(), None);
    }
}
