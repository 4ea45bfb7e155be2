use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::AppState;
use crate::session::{MobileMenu, VisitorSession};
use crate::templates::LandingTemplate;

use super::helpers::{build_template_globals, ensure_session, render_template};

#[derive(Deserialize, Default)]
pub struct LandingQuery {
    pub menu: Option<String>,
}

/// The page mount. Plans start out as placeholders; the page script then asks
/// `/partials/plans` for the real catalog.
pub async fn landing_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(q): Query<LandingQuery>,
) -> Response {
    let (jar, sid) = ensure_session(&state, jar);
    let session = state
        .sessions
        .with(&sid, |s| {
            s.remount();
            s.clone()
        })
        .unwrap_or_default();
    let menu = MobileMenu::from_query(q.menu.as_deref());

    let context = page_context(&session);
    let page = LandingTemplate::build(build_template_globals(&state), &session, menu);
    (jar, render_template(page, &context)).into_response()
}

fn page_context(session: &VisitorSession) -> serde_json::Value {
    serde_json::json!({
        "plansUrl": "/partials/plans",
        "billing": session.billing.as_str(),
        "modalOpen": session.modal.is_open(),
    })
}
