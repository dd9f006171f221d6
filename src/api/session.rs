use crate::api::middleware::AuthUser;
use crate::api::schemas::auth::SessionInfo;
use axum::{Json, response::IntoResponse};

/// Session introspection: reports the verified claims behind the session
/// cookie. This, not the landing page's presence check, is the authoritative
/// answer to "who is this?".
pub async fn introspect(auth_user: AuthUser) -> impl IntoResponse {
    let claims = auth_user.claims;
    Json(SessionInfo { sub: claims.sub, role: claims.role, expires_at: claims.exp as i64 })
}
