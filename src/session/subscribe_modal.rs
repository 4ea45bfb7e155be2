use thiserror::Error;

use crate::models::{BillingCycle, Plan, SubscriberDetails, SubscriptionRequest};
use super::form::{Outcome, SubmitPhase};

pub const SUBSCRIBE_SUCCESS_MESSAGE: &str = "Subscription created! Check your email to activate.";
pub const SUBSCRIBE_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// State of an open modal. Only reachable with a plan in hand.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenModal {
    pub plan: Plan,
    pub draft: SubscriberDetails,
    pub phase: SubmitPhase,
}

impl OpenModal {
    pub fn button_label(&self) -> &'static str {
        if self.phase.is_submitting() {
            "Processing…"
        } else {
            "Start Membership"
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.phase.outcome().map(|o| match o {
            Outcome::Success => SUBSCRIBE_SUCCESS_MESSAGE,
            Outcome::Failure => SUBSCRIBE_FAILURE_MESSAGE,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubscribeModal {
    #[default]
    Closed,
    Open(OpenModal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubscribeRejected {
    #[error("no plan selected")]
    NoPlanSelected,
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

impl SubscribeModal {
    pub fn is_open(&self) -> bool {
        matches!(self, SubscribeModal::Open(_))
    }

    pub fn plan(&self) -> Option<&Plan> {
        match self {
            SubscribeModal::Open(m) => Some(&m.plan),
            SubscribeModal::Closed => None,
        }
    }

    /// Open for `plan` with an empty form and no result.
    pub fn open(&mut self, plan: Plan) {
        *self = SubscribeModal::Open(OpenModal {
            plan,
            draft: SubscriberDetails::default(),
            phase: SubmitPhase::Idle,
        });
    }

    /// Closing drops the draft and any result, so the next open starts clean.
    pub fn close(&mut self) {
        *self = SubscribeModal::Closed;
    }

    /// Start a submission for the selected plan at `cycle`.
    pub fn begin(
        &mut self,
        details: SubscriberDetails,
        cycle: BillingCycle,
    ) -> Result<SubscriptionRequest, SubscribeRejected> {
        let SubscribeModal::Open(modal) = self else {
            return Err(SubscribeRejected::NoPlanSelected);
        };
        modal.phase.begin().map_err(|_| SubscribeRejected::AlreadySubmitting)?;
        let request = SubscriptionRequest::new(&details, &modal.plan, cycle);
        modal.draft = details;
        Ok(request)
    }

    /// Record the outcome if the modal is still open on `plan_name` and waiting.
    pub fn finish(&mut self, plan_name: &str, outcome: Outcome) -> bool {
        let SubscribeModal::Open(modal) = self else {
            return false;
        };
        if modal.plan.name != plan_name || !modal.phase.finish(outcome) {
            return false;
        }
        if outcome == Outcome::Success {
            modal.draft = SubscriberDetails::default();
        }
        true
    }

    pub fn abandon(&mut self) {
        if let SubscribeModal::Open(modal) = self {
            modal.phase.abandon();
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubscribeModal::Open(modal) => modal.message(),
            SubscribeModal::Closed => None,
        }
    }
}
