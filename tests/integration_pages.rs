#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, unreachable_pub)]
use reqwest::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_landing_without_cookie_shows_login() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("<h1>Login</h1>"));
    assert!(!html.contains("Placeholder content"));
}

#[tokio::test]
async fn test_landing_with_cookie_shows_placeholder() {
    let app = common::TestApp::spawn().await;

    // Presence detection only: any non-empty value flips the branch
    let resp = app
        .client
        .get(format!("{}/", app.server_url))
        .header(reqwest::header::COOKIE, "access_token=abc123")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Placeholder content"));
    assert!(!html.contains("<h1>Login</h1>"));
}

#[tokio::test]
async fn test_landing_with_empty_cookie_shows_login() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .get(format!("{}/", app.server_url))
        .header(reqwest::header::COOKIE, "access_token=")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("<h1>Login</h1>"));
}

#[tokio::test]
async fn test_landing_ignores_unrelated_cookies() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .get(format!("{}/", app.server_url))
        .header(reqwest::header::COOKIE, "foo=bar; baz=qux")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("<h1>Login</h1>"));
}

#[tokio::test]
async fn test_landing_after_registration_shows_placeholder() {
    let app = common::TestApp::spawn().await;

    // The client's cookie store carries the Set-Cookie from registration
    let resp = app
        .client
        .post(format!("{}/v1/users", app.server_url))
        .json(&json!({
            "email": "landing@example.com",
            "username": "landing_user",
            "password": "password123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.client.get(format!("{}/", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Placeholder content"));
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/no-such-page", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = resp.text().await.unwrap();
    assert!(html.contains("404 - Not Found"));
    assert!(html.contains("The page you are looking for does not exist."));
    assert!(html.contains(r#"href="/""#));
}
