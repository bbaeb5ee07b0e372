//! Cart session marker.
//!
//! Carts are keyed by the opaque `session-id` request header. It is neither
//! authenticated nor validated; a missing or empty header means the shared
//! `"default"` cart.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The HTTP header carrying the cart session marker.
pub const SESSION_ID_HEADER: &str = "session-id";

/// Session marker used when the header is absent or empty.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Extractor for the cart session marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSession(pub String);

impl<S> FromRequestParts<S> for CartSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session_id = parts
            .headers
            .get(SESSION_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_SESSION_ID);

        Ok(Self(session_id.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(header: Option<&str>) -> String {
        let mut builder = Request::builder().uri("/api/cart");
        if let Some(value) = header {
            builder = builder.header(SESSION_ID_HEADER, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        CartSession::from_request_parts(&mut parts, &()).await.unwrap().0
    }

    #[tokio::test]
    async fn test_header_value_used() {
        assert_eq!(extract(Some("abc")).await, "abc");
    }

    #[tokio::test]
    async fn test_missing_or_empty_header_is_default() {
        assert_eq!(extract(None).await, "default");
        assert_eq!(extract(Some("")).await, "default");
    }
}
