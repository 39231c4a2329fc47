//! Problem details (RFC 7807) returned by every failing request.

use serde::{Deserialize, Serialize};

/// Body of a 4xx/5xx response.
///
/// `type` stays `about:blank`, so `title` is the standard reason phrase
/// or a short phrase naming the auth failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    /// Missing or unusable `Authorization` header.
    pub fn missing_token() -> Self {
        Self::new(401, "Authentication Required")
            .with_detail("Provide a Bearer token in the Authorization header.")
    }

    pub fn invalid_token(detail: impl Into<String>) -> Self {
        Self::new(401, "Invalid Token").with_detail(detail)
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(403, "Forbidden").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(409, "Conflict").with_detail(detail)
    }

    /// Never carries a detail; the cause is logged server-side.
    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_type_field_and_skips_empty_detail() {
        let body = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "type": "about:blank",
                "title": "Internal Server Error",
                "status": 500
            })
        );
    }

    #[test]
    fn test_auth_failures_are_told_apart_by_title() {
        assert_eq!(ErrorResponse::missing_token().title, "Authentication Required");
        assert_eq!(ErrorResponse::invalid_token("token expired").title, "Invalid Token");
        assert_eq!(
            ErrorResponse::invalid_token("token expired").detail.as_deref(),
            Some("token expired")
        );
    }
}
