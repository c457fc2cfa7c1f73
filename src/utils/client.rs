// src/utils/client.rs

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::models::audit::ClientInfo;

/// Pulls the audit-relevant client details out of the request headers.
///
/// The address comes from `X-Forwarded-For` (first hop) when a local proxy
/// sets it; there is no other reliable source in front of the UI.
impl<S: Send + Sync> FromRequestParts<S> for ClientInfo {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(client_info(&parts.headers))
    }
}

pub fn client_info(headers: &HeaderMap) -> ClientInfo {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    ClientInfo {
        ip_address: header_str(header::HeaderName::from_static("x-forwarded-for"))
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string()),
        user_agent: header_str(header::USER_AGENT).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn reads_user_agent_and_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.7, 127.0.0.1"));

        let info = client_info(&headers);
        assert_eq!(info.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(info.ip_address.as_deref(), Some("10.0.0.7"));
    }

    #[test]
    fn missing_headers_are_none() {
        assert_eq!(client_info(&HeaderMap::new()), ClientInfo::default());
    }
}
