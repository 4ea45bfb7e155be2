//! Per-visitor view state.
//!
//! Everything a single-page front end would keep in component memory lives here,
//! as enums that cannot express contradictory states.

pub mod catalog;
pub mod form;
pub mod lead_form;
pub mod menu;
pub mod store;
pub mod subscribe_modal;

pub use catalog::{PendingFetch, PlanCatalog, PLACEHOLDER_CARDS};
pub use form::{AlreadySubmitting, Outcome, SubmitPhase};
pub use lead_form::{LeadForm, LEAD_FAILURE_MESSAGE, LEAD_SUCCESS_MESSAGE};
pub use menu::MobileMenu;
pub use store::{SessionStore, SubmitGuard};
pub use subscribe_modal::{
    OpenModal, SubscribeModal, SubscribeRejected, SUBSCRIBE_FAILURE_MESSAGE, SUBSCRIBE_SUCCESS_MESSAGE,
};

use crate::models::BillingCycle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitorSession {
    pub billing: BillingCycle,
    pub catalog: PlanCatalog,
    /// Bumped on every page mount; a plan fetch only writes back into the mount
    /// that started it.
    pub mount: u64,
    pub lead: LeadForm,
    pub modal: SubscribeModal,
}

impl VisitorSession {
    /// A page load: the displayed catalog is discarded and will be fetched again.
    pub fn remount(&mut self) -> u64 {
        self.mount += 1;
        self.catalog = PlanCatalog::Loading;
        self.mount
    }

    /// Switch billing cycle. Returns false when `cycle` was already active.
    pub fn select_billing(&mut self, cycle: BillingCycle) -> bool {
        if self.billing == cycle {
            return false;
        }
        self.billing = cycle;
        true
    }

    /// Open the modal on a plan from the displayed catalog. Unknown names leave
    /// it as it was.
    pub fn open_subscribe(&mut self, plan_name: &str) -> bool {
        match self.catalog.find(plan_name).cloned() {
            Some(plan) => {
                self.modal.open(plan);
                true
            }
            None => false,
        }
    }
}
