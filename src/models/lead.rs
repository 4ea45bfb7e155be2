use serde::{Deserialize, Serialize};

/// Contact details posted by the lead form and forwarded verbatim to `/lead`.
///
/// Blank optional inputs arrive as empty strings and are sent that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}
