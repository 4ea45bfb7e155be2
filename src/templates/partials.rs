use askama::Template;

use crate::models::content::PLAN_PERKS;
use crate::models::{BillingOptionView, LeadFormView, ModalView, PlanCardView};
use crate::session::{VisitorSession, PLACEHOLDER_CARDS};

/// Billing toggle plus the card grid, as returned by `/partials/plans` and `/billing`.
#[derive(Template)]
#[template(path = "partials/plans_section.html")]
pub struct PlanCardsTemplate {
    pub billing_options: Vec<BillingOptionView>,
    pub loading: bool,
    pub placeholders: Vec<usize>,
    pub cards: Vec<PlanCardView>,
    pub perks: &'static [&'static str],
}

impl PlanCardsTemplate {
    pub fn build(session: &VisitorSession) -> Self {
        Self {
            billing_options: BillingOptionView::all(session.billing),
            loading: session.catalog.is_loading(),
            placeholders: (0..PLACEHOLDER_CARDS).collect(),
            cards: PlanCardView::list(session.catalog.plans(), session.billing),
            perks: &PLAN_PERKS,
        }
    }
}

#[derive(Template)]
#[template(path = "partials/lead_form.html")]
pub struct LeadFormTemplate {
    pub lead: LeadFormView,
}

#[derive(Template)]
#[template(path = "partials/subscribe_modal.html")]
pub struct SubscribeModalTemplate {
    pub modal: ModalView,
}
