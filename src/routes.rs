use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default assets in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");
pub const APP_SCRIPT: &str = include_str!("../static/app.js");

fn static_routes(state: &AppState) -> Router<AppState> {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css; charset=utf-8")], css) }
            }),
        )
        .route(
            "/static/app.js",
            get(|| async { ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], APP_SCRIPT) }),
        )
        .layer(
            ServiceBuilder::new().layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            )),
        )
}

pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(handlers::landing::landing_get))
        .route("/partials/plans", get(handlers::plans::plans_partial))
        .route("/billing", post(handlers::plans::billing_post))
        .route("/lead", post(handlers::leads::lead_post))
        .route("/subscribe/open", post(handlers::subscribe::subscribe_open))
        .route("/subscribe/close", post(handlers::subscribe::subscribe_close))
        .route("/subscribe", post(handlers::subscribe::subscribe_post))
        .route("/healthz", get(handlers::system::healthz))
        // View state is per visitor; never let a proxy share it
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    pages
        .merge(static_routes(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
