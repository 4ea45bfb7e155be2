use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Datelike;
use serde_json::Value;

use crate::config::{BRAND_NAME, SESSION_COOKIE, SESSION_IDLE_MINUTES};
use crate::models::AppState;
use crate::services::start_session;

/// Header set by the page script when it wants a fragment back instead of a redirect.
pub const FETCH_HEADER: &str = "x-requested-with";

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Resolve the visitor's session, starting a new one when the cookie is missing
/// or points at an expired session.
///
/// The cookie is re-issued on every call so its max-age slides along with the
/// server-side idle timer.
pub fn ensure_session(state: &AppState, jar: CookieJar) -> (CookieJar, String) {
    let sid = match session_id_from_jar(&jar) {
        Some(sid) if state.sessions.contains(&sid) => sid,
        _ => start_session(&state.sessions),
    };
    (jar.add(session_cookie(&sid)), sid)
}

fn session_cookie(sid: &str) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, sid.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(time::Duration::minutes(SESSION_IDLE_MINUTES));
    cookie
}

pub fn is_fetch_request(headers: &HeaderMap) -> bool {
    headers
        .get(FETCH_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v.eq_ignore_ascii_case("fetch"))
}

pub struct TemplateGlobals {
    pub brand_name: &'static str,
    pub canonical_url: String,
    pub current_year: i32,
    pub spline_scene_url: String,
}

pub fn build_template_globals(state: &AppState) -> TemplateGlobals {
    let canonical_url = if state.public_base_url.is_empty() {
        "/".to_string()
    } else {
        crate::utils::absolute_url(&state.public_base_url, "/")
    };
    TemplateGlobals {
        brand_name: BRAND_NAME,
        canonical_url,
        current_year: chrono::Local::now().year(),
        spline_scene_url: state.spline_scene_url.clone(),
    }
}

/// Inject the page context the embedded script reads on load.
pub fn inject_context(mut html: String, context: &Value) -> Response {
    let context_str = serde_json::to_string(context).unwrap_or_else(|_| "{}".into());
    let inject = format!(
        r#"<script>window.__APP_CONTEXT__ = {};</script></body>"#,
        context_str
    );
    html = html.replace("</body>", &inject);
    Html(html).into_response()
}

pub fn render_template<T: askama::Template>(t: T, context: &Value) -> Response {
    match t.render() {
        Ok(body) => inject_context(body, context),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Render a partial that gets swapped into an existing page.
pub fn render_fragment<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Fragment render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
