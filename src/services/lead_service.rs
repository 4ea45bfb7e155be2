use crate::api;
use crate::models::{AppState, LeadSubmission};
use crate::session::{Outcome, SubmitGuard};

use super::SubmitResult;

/// Lead form submit: guard, one POST, record the outcome.
pub async fn submit_lead(state: &AppState, sid: &str, submitted: LeadSubmission) -> SubmitResult {
    // Flip to Submitting before the first await so a double click can't slip through
    let payload = match state.sessions.with(sid, |s| s.lead.begin(submitted)) {
        None => return SubmitResult::Dropped,
        Some(Err(_)) => {
            tracing::warn!("Duplicate lead submission ignored");
            return SubmitResult::Rejected;
        }
        Some(Ok(payload)) => payload,
    };
    let guard = SubmitGuard::new(&state.sessions, sid, |s| s.lead.phase.abandon());

    let outcome = match api::submit_lead(&state.client, &state.backend_url, &payload, &state.cancel_token()).await {
        Ok(()) => {
            tracing::info!("Lead submitted");
            Outcome::Success
        }
        Err(e) if e.is_cancelled() => return SubmitResult::Dropped,
        Err(e) => {
            tracing::error!(%e, "Failed to submit lead");
            Outcome::Failure
        }
    };

    let recorded = state.sessions.with(sid, |s| s.lead.finish(outcome));
    guard.disarm();
    match recorded {
        Some(true) => SubmitResult::Recorded(outcome),
        _ => SubmitResult::Dropped,
    }
}
