//! `AuthUser` extractor: resolves the bearer token and injects context.

use axum::extract::{FromRequestParts, Query};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use serde::Deserialize;

use nestor_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Reads the bearer token from the `Authorization` header, falling back to
/// the `token` query parameter. Blank values count as absent.
fn bearer_token(parts: &Parts) -> Option<String> {
    let from_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim().to_string())
        .filter(|token| !token.is_empty());

    from_header.or_else(|| {
        Query::<TokenQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.token)
            .filter(|token| !token.is_empty())
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts);
        let user = state.gate.resolve(token.as_deref()).await?;

        Ok(AuthUser(RequestContext::from(&user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(uri: &str, auth: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_header_wins_over_query() {
        let p = parts("/tokens/?token=QUERY", Some("Bearer HEADER"));
        assert_eq!(bearer_token(&p).as_deref(), Some("HEADER"));
    }

    #[test]
    fn test_query_fallback() {
        let p = parts("/tokens/?token=QUERY", None);
        assert_eq!(bearer_token(&p).as_deref(), Some("QUERY"));
        let p = parts("/tokens/?token=QUERY", Some("Basic abc"));
        assert_eq!(bearer_token(&p).as_deref(), Some("QUERY"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let p = parts("/tokens/", Some("bearer HEADER"));
        assert_eq!(bearer_token(&p).as_deref(), Some("HEADER"));
        let p = parts("/tokens/", Some("BEARER HEADER"));
        assert_eq!(bearer_token(&p).as_deref(), Some("HEADER"));
    }

    #[test]
    fn test_blank_header_falls_back_to_query() {
        let p = parts("/tokens/?token=QUERY", Some("Bearer "));
        assert_eq!(bearer_token(&p).as_deref(), Some("QUERY"));
        let p = parts("/tokens/?token=", Some("Bearer "));
        assert_eq!(bearer_token(&p), None);
    }

    #[test]
    fn test_absent() {
        assert_eq!(bearer_token(&parts("/tokens/", None)), None);
    }
}
