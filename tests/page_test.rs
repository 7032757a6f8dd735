//! End-to-end tests for the localized demo page.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use axum::Router;
use axum::body::Body;
use axum::http::{
    Request,
    StatusCode,
    header,
};
use custom_localizer::config::Settings;
use custom_localizer::server::{
    AppState,
    build_router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_router() -> Router {
    build_router(AppState::new(Settings::default()))
}

async fn get_page(uri: &str, accept_language: Option<&str>) -> (StatusCode, String, String) {
    let mut request = Request::builder().uri(uri);
    if let Some(header_value) = accept_language {
        request = request.header(header::ACCEPT_LANGUAGE, header_value);
    }

    let response =
        test_router().oneshot(request.body(Body::empty()).unwrap()).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_html_with_utf8_charset() {
    let (status, content_type, body) = get_page("/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert!(body.starts_with("<html><body>"));
    assert!(body.ends_with("</body></html>"));
}

#[tokio::test]
async fn default_request_falls_back_to_raw_keys() {
    let (_, _, body) = get_page("/", None).await;

    assert!(body.contains("<h2>Hello!</h2>"));
    assert!(body.contains("<h2>Goodbye</h2>"));
    assert!(body.contains("English (United States)"));
    assert!(body.contains("1,234,567.89"));
    assert!(body.contains("$42.00"));
}

#[tokio::test]
async fn swedish_request_gets_swedish_translations() {
    let (_, _, body) = get_page("/", Some("sv-SE,sv;q=0.9,en;q=0.8")).await;

    assert!(body.contains("<h2>Hej!</h2>"));
    assert!(body.contains("<h2>Hej då</h2>"));
    assert!(body.contains("Swedish (Sweden)"));
    assert!(body.contains("42,00\u{a0}kr"));
    // Labels without catalog entries stay as their English key text.
    assert!(body.contains("<td>Current Culture</td>"));
    assert!(body.contains("<td>Current UI Culture</td>"));
}

#[tokio::test]
async fn unsupported_language_falls_back_to_default() {
    let (_, _, body) = get_page("/", Some("de-DE,fr-FR;q=0.7")).await;

    assert!(body.contains("<h2>Hello!</h2>"));
    assert!(body.contains("English (United States)"));
}

#[tokio::test]
async fn query_string_overrides_accept_language() {
    let (_, _, body) = get_page("/?culture=ja-JP", Some("it-IT")).await;

    assert!(body.contains("<h2>こんにちは!</h2>"));
    assert!(body.contains("Japanese (Japan)"));
    assert!(body.contains("￥42"));
}

#[tokio::test]
async fn separate_query_cultures_split_formatting_and_labels() {
    let (_, _, body) = get_page("/?culture=it-IT&ui-culture=ru-RU", None).await;

    // it-IT drives the value formatting.
    assert!(body.contains("1.234.567,89"));
    assert!(body.contains("Italian (Italy)"));
    // ru-RU drives the labels.
    assert!(body.contains("<h2>Привет!</h2>"));
    assert!(body.contains("<td>Текущая дата</td>"));
}
