// Backend API modules
pub mod cancel;
pub mod client;
pub mod error;
pub mod plans;
pub mod leads;
pub mod subscriptions;

// Re-export commonly used items
pub use cancel::{CancelSource, CancelToken};
pub use client::{api_call, set_silent};
pub use error::BackendError;
pub use plans::{load_plans, parse_plans};
pub use leads::submit_lead;
pub use subscriptions::submit_subscription;
