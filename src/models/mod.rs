pub mod app_state;
pub mod billing_cycle;
pub mod content;
pub mod form_view;
pub mod lead;
pub mod plan;
pub mod plan_card_view;
pub mod subscription;

pub use app_state::AppState;
pub use billing_cycle::BillingCycle;
pub use content::{Feature, Stat, FEATURES, STATS};
pub use form_view::{LeadFormView, ModalView, ResultView};
pub use lead::LeadSubmission;
pub use plan::Plan;
pub use plan_card_view::{BillingOptionView, PlanCardView};
pub use subscription::{SubscriberDetails, SubscriptionRequest, SubscriptionStatus};
