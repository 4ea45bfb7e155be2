use crate::models::SubscriptionRequest;
use super::cancel::CancelToken;
use super::client::api_call;
use super::error::BackendError;

/// Post a subscription request. Any 2xx counts as created; the body is ignored.
pub async fn submit_subscription(
    client: &reqwest::Client,
    backend_url: &str,
    request: &SubscriptionRequest,
    cancel: &CancelToken,
) -> Result<(), BackendError> {
    let body = serde_json::to_value(request).map_err(|e| BackendError::Decode(e.to_string()))?;
    api_call(client, backend_url, "POST", "/subscribe", Some(body), cancel).await?;
    Ok(())
}
