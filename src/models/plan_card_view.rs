use crate::models::{BillingCycle, Plan};

/// One plan card, already resolved against the selected billing cycle.
#[derive(Debug, Clone)]
pub struct PlanCardView {
    pub name: String,
    pub description: String,
    pub price_label: String,
    pub period: &'static str,
    pub washes_per_month: u32,
    pub popular: bool,
}

impl PlanCardView {
    pub fn new(plan: &Plan, cycle: BillingCycle) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            price_label: plan.price_label(cycle),
            period: cycle.period(),
            washes_per_month: plan.washes_per_month,
            popular: plan.popular,
        }
    }

    pub fn list(plans: &[Plan], cycle: BillingCycle) -> Vec<Self> {
        plans.iter().map(|p| Self::new(p, cycle)).collect()
    }
}

/// A button of the monthly/yearly toggle.
#[derive(Debug, Clone)]
pub struct BillingOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl BillingOptionView {
    pub fn all(selected: BillingCycle) -> Vec<Self> {
        BillingCycle::ALL
            .iter()
            .map(|c| Self {
                value: c.as_str(),
                label: c.label(),
                active: *c == selected,
            })
            .collect()
    }
}
