use crate::config::Config;
use crate::domain::token::TokenKeeper;
use crate::services::account_service::AccountService;
use crate::storage::user_repo::UserRepository;
use axum::body::Body;
use axum::http::Request;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod health;
pub mod meta;
pub mod middleware;
pub mod pages;
pub mod schemas;
pub mod session;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub account_service: AccountService,
    pub tokens: TokenKeeper,
}

/// Configures and returns the application router.
#[must_use]
pub fn app_router(config: Config) -> Router {
    let tokens = TokenKeeper::new(&config.auth);
    let account_service = AccountService::new(config.auth.clone(), UserRepository::new(), tokens.clone());
    let state = AppState { config, account_service, tokens };

    let api_routes = Router::new()
        .route("/users", post(auth::register))
        .route("/sessions", post(auth::login))
        .route("/session", get(session::introspect))
        .route("/password-policy", get(meta::password_policy));

    Router::new()
        .route("/", get(pages::landing))
        .route("/livez", get(health::livez))
        .nest("/v1", api_routes)
        .fallback(pages::not_found)
        .layer(PropagateRequestIdLayer::new(axum::http::HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        let status = response.status();
                        tracing::Span::current().record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static("x-request-id"),
            middleware::MakeRequestUuid,
        ))
        .with_state(state)
}
