pub mod catalog_service;
pub mod lead_service;
pub mod session_service;
pub mod subscription_service;

// Re-export commonly used functions
pub use catalog_service::load_catalog;
pub use lead_service::submit_lead;
pub use session_service::{random_session_id, start_session};
pub use subscription_service::submit_subscription;

use crate::session::Outcome;

/// What happened to a form submission, from the page's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// One request went out and its outcome is now on the form.
    Recorded(Outcome),
    /// Nothing was sent: already submitting, or no plan selected.
    Rejected,
    /// The visitor's view went away (expired session, cancellation) before the
    /// outcome could be shown.
    Dropped,
}
