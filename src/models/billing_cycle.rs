use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pricing mode for the plan grid and the subscription request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Yearly];

    /// Wire value sent to the backend as `billing_cycle`
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    /// Suffix printed after a price, as in `$19/mo`
    pub fn period(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "mo",
            BillingCycle::Yearly => "yr",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "mo" => Ok(BillingCycle::Monthly),
            "yearly" | "year" | "yr" | "annual" => Ok(BillingCycle::Yearly),
            other => Err(format!("unknown billing cycle '{}' (expected monthly or yearly)", other)),
        }
    }
}
