use crate::models::LeadSubmission;
use super::cancel::CancelToken;
use super::client::api_call;
use super::error::BackendError;

/// Post a lead. Any 2xx counts as accepted; the response body is ignored.
pub async fn submit_lead(
    client: &reqwest::Client,
    backend_url: &str,
    lead: &LeadSubmission,
    cancel: &CancelToken,
) -> Result<(), BackendError> {
    let body = serde_json::to_value(lead).map_err(|e| BackendError::Decode(e.to_string()))?;
    api_call(client, backend_url, "POST", "/lead", Some(body), cancel).await?;
    Ok(())
}
