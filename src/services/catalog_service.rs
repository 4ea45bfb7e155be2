use crate::api::{load_plans, BackendError};
use crate::models::AppState;
use crate::session::{PendingFetch, PlanCatalog, VisitorSession};

enum Step {
    Done,
    Join(u64, PendingFetch),
}

/// The plan fetch behind a page mount.
///
/// Runs at most one backend request per mount: the first caller marks the
/// catalog as fetching under the session lock, later callers of the same mount
/// wait for that request. Failures are logged and yield an empty catalog.
///
/// The returned view always carries the fetched plans, even if the session
/// has since been remounted; only the write-back is skipped then. Returns `None`
/// when the call was cancelled.
pub async fn load_catalog(state: &AppState, sid: &str) -> Option<VisitorSession> {
    let step = state.sessions.with(sid, |s| match &s.catalog {
        PlanCatalog::Ready(_) => Step::Done,
        PlanCatalog::Fetching(pending) => Step::Join(s.mount, pending.clone()),
        PlanCatalog::Loading => {
            let pending = PendingFetch::default();
            s.catalog = PlanCatalog::Fetching(pending.clone());
            Step::Join(s.mount, pending)
        }
    });
    let (mount, pending) = match step {
        Some(Step::Done) => return state.sessions.snapshot(sid),
        Some(Step::Join(mount, pending)) => (mount, pending),
        // Session expired between cookie check and now: fetch for this response only
        None => (0, PendingFetch::default()),
    };

    let cancel = state.cancel_token();
    let cancel = &cancel;
    let fetched = pending
        .join(move || async move {
            match load_plans(&state.client, &state.backend_url, cancel).await {
                Ok(plans) => Ok(plans),
                Err(BackendError::Cancelled) => Err(BackendError::Cancelled),
                Err(e) => {
                    tracing::error!(%e, "Failed to load plans");
                    Ok(Vec::new())
                }
            }
        })
        .await;
    let plans = match fetched {
        Ok(plans) => plans,
        Err(_) => {
            tracing::info!("Plan fetch cancelled");
            return None;
        }
    };

    let view = state.sessions.with(sid, |s| {
        let current = matches!(&s.catalog, PlanCatalog::Fetching(p) if p.same_as(&pending));
        if s.mount == mount && current {
            s.catalog = PlanCatalog::Ready(plans.clone());
        } else {
            tracing::debug!(mount, current = s.mount, "Not storing plans for a stale mount");
        }
        s.clone()
    });

    let mut view = view.unwrap_or_default();
    view.catalog = PlanCatalog::Ready(plans);
    Some(view)
}
