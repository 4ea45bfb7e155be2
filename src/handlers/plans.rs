use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::{AppState, BillingCycle};
use crate::services::load_catalog;
use crate::templates::PlanCardsTemplate;

use super::helpers::{ensure_session, is_fetch_request, render_fragment};

#[derive(Deserialize)]
pub struct BillingForm {
    pub cycle: BillingCycle,
}

pub async fn plans_partial(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, sid) = ensure_session(&state, jar);
    let session = load_catalog(&state, &sid).await.unwrap_or_default();
    (jar, render_fragment(PlanCardsTemplate::build(&session))).into_response()
}

pub async fn billing_post(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<BillingForm>,
) -> Response {
    let (jar, sid) = ensure_session(&state, jar);
    let session = state
        .sessions
        .with(&sid, |s| {
            if s.select_billing(form.cycle) {
                tracing::debug!(billing = %form.cycle, "Billing cycle changed");
            }
            s.clone()
        })
        .unwrap_or_default();

    if is_fetch_request(&headers) {
        // Re-render from the catalog already on screen; no new backend call
        return (jar, render_fragment(PlanCardsTemplate::build(&session))).into_response();
    }
    (jar, Redirect::to("/#plans")).into_response()
}
