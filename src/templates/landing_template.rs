use askama::Template;

use crate::handlers::helpers::TemplateGlobals;
use crate::models::content::{HERO_HEADLINE, HERO_SUBHEADLINE, PLAN_PERKS};
use crate::models::{
    BillingOptionView, Feature, LeadFormView, ModalView, PlanCardView, Stat, FEATURES, STATS,
};
use crate::session::{MobileMenu, SubscribeModal, VisitorSession, PLACEHOLDER_CARDS};

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub brand_name: &'static str,
    pub canonical_url: String,
    pub current_year: i32,
    pub spline_scene_url: String,
    pub hero_headline: &'static str,
    pub hero_subheadline: &'static str,
    pub menu_open: bool,
    pub features: &'static [Feature],
    pub stats: &'static [Stat],
    pub perks: &'static [&'static str],
    pub billing_options: Vec<BillingOptionView>,
    pub loading: bool,
    pub placeholders: Vec<usize>,
    pub cards: Vec<PlanCardView>,
    pub lead: LeadFormView,
    pub modal: Option<ModalView>,
}

impl LandingTemplate {
    pub fn build(globals: TemplateGlobals, session: &VisitorSession, menu: MobileMenu) -> Self {
        let TemplateGlobals {
            brand_name,
            canonical_url,
            current_year,
            spline_scene_url,
        } = globals;
        let modal = match &session.modal {
            SubscribeModal::Open(open) => Some(ModalView::new(open, session.billing)),
            SubscribeModal::Closed => None,
        };
        Self {
            brand_name,
            canonical_url,
            current_year,
            spline_scene_url,
            hero_headline: HERO_HEADLINE,
            hero_subheadline: HERO_SUBHEADLINE,
            menu_open: menu.is_open(),
            features: &FEATURES,
            stats: &STATS,
            perks: &PLAN_PERKS,
            billing_options: BillingOptionView::all(session.billing),
            loading: session.catalog.is_loading(),
            placeholders: (0..PLACEHOLDER_CARDS).collect(),
            cards: PlanCardView::list(session.catalog.plans(), session.billing),
            lead: LeadFormView::new(&session.lead),
            modal,
        }
    }
}
