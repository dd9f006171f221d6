use crate::api::AppState;
use crate::domain::session::{ACCESS_TOKEN_COOKIE, has_access_token};
use crate::domain::token::Claims;
use crate::error::AppError;
use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, Request, header, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::convert::Infallible;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Supplies `x-request-id` values; requests arriving with one keep it.
#[derive(Clone, Copy, Debug)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Whether a plausible session cookie accompanied the request. Resolved once
/// per request from the raw `Cookie` header; an absent header reads as empty.
/// Presence detection only, never an authentication decision.
#[derive(Debug, Clone, Copy)]
pub struct SessionPresence(pub bool);

impl<S> FromRequestParts<S> for SessionPresence
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.headers.get(header::COOKIE).and_then(|value| value.to_str().ok()).unwrap_or_default();

        Ok(Self(has_access_token(cookies)))
    }
}

/// The verified counterpart: extracts the session cookie and checks its
/// signature and expiry. Rejects with 401 on any failure.
#[derive(Debug)]
pub struct AuthUser {
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(ACCESS_TOKEN_COOKIE).map(Cookie::value).ok_or(AppError::AuthError)?;

        let claims = state.tokens.verify(token).map_err(|err| {
            tracing::debug!(error = %err, "Session token rejected");
            AppError::AuthError
        })?;

        Ok(Self { claims })
    }
}
