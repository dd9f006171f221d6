use crate::api::middleware::SessionPresence;
use crate::domain::session::SessionState;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// Landing page: a login prompt or placeholder signed-in content, chosen by
/// cookie presence alone. Token verification happens elsewhere (`/v1/session`).
pub async fn landing(SessionPresence(present): SessionPresence) -> Html<String> {
    let body = match SessionState::default().resolve(present) {
        SessionState::Authenticated => {
            r#"<main class="content">
      <p>Placeholder content</p>
    </main>"#
        }
        _ => {
            r#"<main class="content">
      <div class="card">
        <h1>Login</h1>
        <p>Sign in to continue to your dashboard.</p>
      </div>
    </main>"#
        }
    };

    Html(layout("Vestibule", body))
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    let body = r#"<main class="content">
      <h1>404 - Not Found</h1>
      <p>The page you are looking for does not exist.</p>
      <a class="button" href="/">Home</a>
    </main>"#;

    (StatusCode::NOT_FOUND, Html(layout("404 | Vestibule", body)))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
  </head>
  <body>
    <nav class="navbar">
      <ul>
        <li><a href="/dashboard">Dashboard</a></li>
        <li>Services</li>
      </ul>
    </nav>
    {body}
  </body>
</html>
"#
    )
}
