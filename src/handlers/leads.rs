use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, LeadFormView, LeadSubmission};
use crate::services::submit_lead;
use crate::templates::LeadFormTemplate;

use super::helpers::{ensure_session, is_fetch_request, render_fragment};

pub async fn lead_post(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(lead): Form<LeadSubmission>,
) -> Response {
    let (jar, sid) = ensure_session(&state, jar);
    let result = submit_lead(&state, &sid, lead).await;
    tracing::debug!(?result, "Lead form handled");

    if is_fetch_request(&headers) {
        let session = state.sessions.snapshot(&sid).unwrap_or_default();
        let fragment = LeadFormTemplate { lead: LeadFormView::new(&session.lead) };
        return (jar, render_fragment(fragment)).into_response();
    }
    (jar, Redirect::to("/#contact")).into_response()
}
