use crate::models::{LeadSubmission, SubscriberDetails};
use crate::session::{LeadForm, OpenModal, Outcome};

/// Result line under a form. `ok` drives the success/error colour.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub message: String,
    pub ok: bool,
}

impl ResultView {
    fn new(message: Option<&'static str>, outcome: Option<Outcome>) -> Option<Self> {
        message.map(|m| Self {
            message: m.to_string(),
            ok: outcome == Some(Outcome::Success),
        })
    }
}

#[derive(Debug, Clone)]
pub struct LeadFormView {
    pub draft: LeadSubmission,
    pub submitting: bool,
    pub button_label: &'static str,
    pub result: Option<ResultView>,
}

impl LeadFormView {
    pub fn new(form: &LeadForm) -> Self {
        Self {
            draft: form.draft.clone(),
            submitting: form.phase.is_submitting(),
            button_label: form.button_label(),
            result: ResultView::new(form.message(), form.phase.outcome()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalView {
    pub plan_name: String,
    pub description: String,
    pub price_label: String,
    pub period: &'static str,
    pub draft: SubscriberDetails,
    pub submitting: bool,
    pub button_label: &'static str,
    pub result: Option<ResultView>,
}

impl ModalView {
    pub fn new(modal: &OpenModal, cycle: crate::models::BillingCycle) -> Self {
        Self {
            plan_name: modal.plan.name.clone(),
            description: modal.plan.description.clone(),
            price_label: modal.plan.price_label(cycle),
            period: cycle.period(),
            draft: modal.draft.clone(),
            submitting: modal.phase.is_submitting(),
            button_label: modal.button_label(),
            result: ResultView::new(modal.message(), modal.phase.outcome()),
        }
    }
}
