use crate::api::AppState;
use crate::api::schemas::meta::PasswordPolicy;
use axum::{Json, extract::State, response::IntoResponse};

/// Credential length bounds for client-side form validation.
pub async fn password_policy(State(state): State<AppState>) -> impl IntoResponse {
    let auth = &state.config.auth;
    Json(PasswordPolicy {
        password_min_length: auth.password_min_length,
        password_max_length: auth.password_max_length,
        username_min_length: auth.username_min_length,
        username_max_length: auth.username_max_length,
    })
}
