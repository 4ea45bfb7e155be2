use serde::{Deserialize, Serialize};

use crate::models::BillingCycle;
use crate::utils::format_price;

/// A membership tier as returned by the backend's `/plans`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_monthly: f64,
    pub price_yearly: f64,
    #[serde(default)]
    pub washes_per_month: u32,
    #[serde(default)]
    pub popular: bool,
}

impl Plan {
    pub fn price_for(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.price_monthly,
            BillingCycle::Yearly => self.price_yearly,
        }
    }

    /// `$19` style label for the given cycle (period suffix not included)
    pub fn price_label(&self, cycle: BillingCycle) -> String {
        format!("${}", format_price(self.price_for(cycle)))
    }
}
