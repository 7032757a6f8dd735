//! HTTP surface: a single page served for the negotiated request cultures.

use std::sync::Arc;

use axum::Router;
use axum::extract::{
    Query,
    State,
};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::get;
use chrono::Local;
use serde::Deserialize;
use tracing::{
    error,
    info,
};

use crate::config::Settings;
use crate::localizer::LocalizerFactory;
use crate::negotiate;
use crate::render;

/// Shared state for request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    settings: Arc<Settings>,
    factory: LocalizerFactory,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings: Arc::new(settings), factory: LocalizerFactory::new() }
    }
}

/// Explicit culture overrides in the query string.
#[derive(Debug, Deserialize)]
struct CultureQuery {
    culture: Option<String>,
    #[serde(rename = "ui-culture")]
    ui_culture: Option<String>,
}

/// Builds the application router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

/// `GET /` — the localized demo page.
async fn index(
    State(state): State<AppState>,
    Query(query): Query<CultureQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let accept_language =
        headers.get("accept-language").and_then(|value| value.to_str().ok());

    let cultures = negotiate::negotiate(
        &state.settings.supported_cultures,
        &state.settings.default_culture,
        accept_language,
        query.culture.as_deref(),
        query.ui_culture.as_deref(),
    );

    let localizer = state.factory.create("pages.index");
    let today = Local::now().date_naive();

    Html(render::render_page(&localizer, &cultures, today))
}

/// Starts the server and blocks until it exits.
pub async fn serve(settings: Settings) {
    let addr = format!("{}:{}", settings.host, settings.port);
    let app = build_router(AppState::new(settings));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {addr}: {e}");
            return;
        }
    };

    info!("Listening on {addr}");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
    }
}
