//! REST Command Wrappers
//!
//! Frontend bindings to backend endpoints, organized by domain.
//! Every response body is a `{ "data": ... }` envelope.

mod group;
mod party;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Re-export all public items
pub use group::*;
pub use party::*;

/// Characters left as-is in a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Response envelope used by every endpoint
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// API call failures
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never got a response
    Network(String),
    Unauthorized,
    NotFound(String),
    Server { status: u16, message: String },
    /// Response body was not what we expected
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Unauthorized => write!(f, "Not authorized"),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Server { status, message } => write!(f, "Server error {}: {}", status, message),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Map a non-success status and its body to an error
fn status_error(status: u16, body: &str) -> ApiError {
    let message = error_message(body);
    match status {
        401 | 403 => ApiError::Unauthorized,
        404 => ApiError::NotFound(message),
        _ => ApiError::Server { status, message },
    }
}

/// Backend errors look like `{ "message": "..." }`; fall back to the raw body
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "no details".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// HTTP client bound to the configured backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Join encoded path segments onto the base URL
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, SEGMENT));
        }
        url
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let response = self.http.get(self.url(segments)).send().await?;
        read_envelope(response).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url(segments)).json(body).send().await?;
        read_envelope(response).await
    }

    pub async fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.put(self.url(segments)).json(body).send().await?;
        read_envelope(response).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<(), ApiError> {
        let response = self.http.delete(self.url(segments)).send().await?;
        ensure_success(response).await.map(|_| ())
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), &body))
}

async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    let text = response.text().await?;
    decode_envelope(&text)
}

fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupRecord;

    #[test]
    fn test_url_encodes_segments() {
        let api = ApiClient::new("http://localhost:3000/api/");
        assert_eq!(api.url(&["group"]), "http://localhost:3000/api/group");
        assert_eq!(
            api.url(&["group", "a/b c"]),
            "http://localhost:3000/api/group/a%2Fb%20c"
        );
        assert_eq!(api.url(&["customer", "c-1", "approve"]), "http://localhost:3000/api/customer/c-1/approve");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_error(401, ""), ApiError::Unauthorized);
        assert_eq!(status_error(403, "{}"), ApiError::Unauthorized);
        assert_eq!(
            status_error(404, r#"{"message": "Group not found"}"#),
            ApiError::NotFound("Group not found".to_string())
        );
        assert_eq!(
            status_error(500, "boom"),
            ApiError::Server { status: 500, message: "boom".to_string() }
        );
        assert_eq!(
            status_error(502, "  "),
            ApiError::Server { status: 502, message: "no details".to_string() }
        );
    }

    #[test]
    fn test_decode_group_envelope() {
        let body = r#"{"data": [
            {"id": "1", "name": "Assets", "parentGroup": null},
            {"id": "2", "name": "Cash", "parentGroup": {"id": "1"}}
        ]}"#;
        let groups: Vec<GroupRecord> = decode_envelope(body).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].parent_id(), Some("1"));
    }

    #[test]
    fn test_decode_missing_envelope() {
        let result: Result<Vec<GroupRecord>, ApiError> = decode_envelope(r#"[]"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
