use serde::{Deserialize, Serialize};

use crate::models::{BillingCycle, Plan};

/// Fields typed into the subscription modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub vehicle: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Pending,
}

/// Body of `POST /subscribe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle: String,
    pub plan_name: String,
    pub billing_cycle: BillingCycle,
    pub status: SubscriptionStatus,
}

impl SubscriptionRequest {
    /// Plan name and cycle always come from the selection, never from the form,
    /// and every new request starts out pending.
    pub fn new(details: &SubscriberDetails, plan: &Plan, billing_cycle: BillingCycle) -> Self {
        Self {
            customer_name: details.name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            vehicle: details.vehicle.clone(),
            plan_name: plan.name.clone(),
            billing_cycle,
            status: SubscriptionStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape() {
        let plan = Plan {
            name: "Basic".into(),
            description: "Starter".into(),
            price_monthly: 19.0,
            price_yearly: 190.0,
            washes_per_month: 4,
            popular: false,
        };
        let details = SubscriberDetails {
            name: "Alex Johnson".into(),
            email: "alex@email.com".into(),
            phone: String::new(),
            vehicle: "Tesla Model 3".into(),
        };
        let req = SubscriptionRequest::new(&details, &plan, BillingCycle::Yearly);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "customer_name": "Alex Johnson",
                "email": "alex@email.com",
                "phone": "",
                "vehicle": "Tesla Model 3",
                "plan_name": "Basic",
                "billing_cycle": "yearly",
                "status": "pending"
            })
        );
    }
}
