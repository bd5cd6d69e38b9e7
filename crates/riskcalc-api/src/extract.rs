//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that also accepts requests without a `Content-Type`.
///
/// A body is parsed as JSON when the header is absent or names a JSON
/// subtype (`application/json`, `application/*+json`). Any other content
/// type, and any body that fails to deserialize, is rejected as
/// [`ApiError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !accepts_json(req.headers()) {
            return Err(ApiError::Validation(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            ApiError::Validation(format!("Failed to parse the request body as JSON: {e}"))
        })
    }
}

/// True when the content type is missing or is a JSON subtype.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((_, subtype)) => {
            let subtype = subtype.to_ascii_lowercase();
            subtype == "json" || subtype.ends_with("+json")
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_missing_content_type_is_json() {
        assert!(accepts_json(&HeaderMap::new()));
    }

    #[test]
    fn test_json_content_types() {
        assert!(accepts_json(&with_content_type("application/json")));
        assert!(accepts_json(&with_content_type("application/json; charset=utf-8")));
        assert!(accepts_json(&with_content_type("Application/JSON")));
        assert!(accepts_json(&with_content_type("application/vnd.api+json")));
    }

    #[test]
    fn test_other_content_types() {
        assert!(!accepts_json(&with_content_type("text/plain")));
        assert!(!accepts_json(&with_content_type("application/x-www-form-urlencoded")));
        assert!(!accepts_json(&with_content_type("json")));
    }
}
