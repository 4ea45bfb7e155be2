use crate::api;
use crate::models::{AppState, SubscriberDetails};
use crate::session::{Outcome, SubmitGuard, SubscribeRejected};

use super::SubmitResult;

/// Subscription modal submit. Plan and billing cycle come from the session, not
/// from the posted form.
pub async fn submit_subscription(state: &AppState, sid: &str, details: SubscriberDetails) -> SubmitResult {
    let request = match state.sessions.with(sid, |s| {
        let billing = s.billing;
        s.modal.begin(details, billing)
    }) {
        None => return SubmitResult::Dropped,
        Some(Err(SubscribeRejected::NoPlanSelected)) => {
            tracing::debug!("Subscribe posted with the modal closed");
            return SubmitResult::Rejected;
        }
        Some(Err(SubscribeRejected::AlreadySubmitting)) => {
            tracing::warn!("Duplicate subscription submission ignored");
            return SubmitResult::Rejected;
        }
        Some(Ok(request)) => request,
    };
    let guard = SubmitGuard::new(&state.sessions, sid, |s| s.modal.abandon());

    let outcome = match api::submit_subscription(&state.client, &state.backend_url, &request, &state.cancel_token()).await {
        Ok(()) => {
            tracing::info!(plan = %request.plan_name, billing = %request.billing_cycle, "Subscription submitted");
            Outcome::Success
        }
        Err(e) if e.is_cancelled() => return SubmitResult::Dropped,
        Err(e) => {
            tracing::error!(%e, plan = %request.plan_name, "Failed to submit subscription");
            Outcome::Failure
        }
    };

    let recorded = state.sessions.with(sid, |s| s.modal.finish(&request.plan_name, outcome));
    guard.disarm();
    match recorded {
        Some(true) => SubmitResult::Recorded(outcome),
        _ => SubmitResult::Dropped,
    }
}
