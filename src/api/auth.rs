use crate::api::AppState;
use crate::api::schemas::auth::{Login, Registration, SessionResponse};
use crate::config::AuthConfig;
use crate::domain::session::{ACCESS_TOKEN_COOKIE, Session};
use crate::error::Result;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<Registration>,
) -> Result<impl IntoResponse> {
    let session = state.account_service.register(payload.email, payload.username, payload.password).await?;

    let jar = jar.add(session_cookie(&state.config.auth, session.token.clone()));
    Ok((StatusCode::CREATED, jar, Json(map_session(session))))
}

pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(payload): Json<Login>) -> Result<impl IntoResponse> {
    let session = state.account_service.login(payload.email, payload.password).await?;

    let jar = jar.add(session_cookie(&state.config.auth, session.token.clone()));
    Ok((jar, Json(map_session(session))))
}

fn session_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}

fn map_session(session: Session) -> SessionResponse {
    SessionResponse { token: session.token, email: session.email, expires_at: session.expires_at }
}
