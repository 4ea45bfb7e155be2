use axum::{
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::{AppState, ModalView, SubscriberDetails};
use crate::services::submit_subscription;
use crate::session::SubscribeModal;
use crate::templates::SubscribeModalTemplate;

use super::helpers::{ensure_session, is_fetch_request, render_fragment};

#[derive(Deserialize)]
pub struct OpenForm {
    #[serde(default)]
    pub plan_name: String,
}

/// The modal as it stands: its markup, or 204 when it is closed.
fn modal_fragment(state: &AppState, sid: &str) -> Response {
    let session = state.sessions.snapshot(sid).unwrap_or_default();
    match &session.modal {
        SubscribeModal::Open(modal) => {
            render_fragment(SubscribeModalTemplate { modal: ModalView::new(modal, session.billing) })
        }
        SubscribeModal::Closed => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Opening is view state only: with the page script it swaps the modal in without
/// reloading the page, so the catalog on screen stays put.
pub async fn subscribe_open(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<OpenForm>,
) -> Response {
    let (jar, sid) = ensure_session(&state, jar);
    let plan_name = form.plan_name.trim();
    let opened = state
        .sessions
        .with(&sid, |s| s.open_subscribe(plan_name))
        .unwrap_or(false);
    if !opened {
        tracing::warn!(plan = %plan_name, "Subscribe requested for a plan that is not on screen");
    }

    if is_fetch_request(&headers) {
        return (jar, modal_fragment(&state, &sid)).into_response();
    }
    let target = if opened { "/#subscribe" } else { "/#plans" };
    (jar, Redirect::to(target)).into_response()
}

pub async fn subscribe_close(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    let (jar, sid) = ensure_session(&state, jar);
    state.sessions.with(&sid, |s| s.modal.close());

    if is_fetch_request(&headers) {
        return (jar, StatusCode::NO_CONTENT).into_response();
    }
    (jar, Redirect::to("/#plans")).into_response()
}

pub async fn subscribe_post(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(details): Form<SubscriberDetails>,
) -> Response {
    let (jar, sid) = ensure_session(&state, jar);
    let result = submit_subscription(&state, &sid, details).await;
    tracing::debug!(?result, "Subscription form handled");

    if is_fetch_request(&headers) {
        return (jar, modal_fragment(&state, &sid)).into_response();
    }
    (jar, Redirect::to("/#subscribe")).into_response()
}
