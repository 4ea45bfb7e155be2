use crate::models::Plan;
use super::cancel::CancelToken;
use super::client::api_call;
use super::error::BackendError;

/// Fetch the current plan catalog.
/// Order is exactly what the backend returned.
pub async fn load_plans(
    client: &reqwest::Client,
    backend_url: &str,
    cancel: &CancelToken,
) -> Result<Vec<Plan>, BackendError> {
    let body = api_call(client, backend_url, "GET", "/plans", None, cancel).await?;
    let plans = parse_plans(&body)?;
    tracing::debug!(count = plans.len(), "Loaded plans");
    Ok(plans)
}

pub fn parse_plans(body: &str) -> Result<Vec<Plan>, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_backend_order() {
        let body = r#"[
            {"name":"Premium","description":"All in","price_monthly":49,"price_yearly":490,"washes_per_month":30,"popular":true},
            {"name":"Basic","description":"Starter","price_monthly":19,"price_yearly":190,"washes_per_month":4,"popular":false}
        ]"#;
        let plans = parse_plans(body).unwrap();
        let names: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Premium", "Basic"]);
        assert!(plans[0].popular);
    }

    #[test]
    fn missing_optional_fields_default() {
        let plans = parse_plans(r#"[{"name":"Basic","price_monthly":19,"price_yearly":190,"washes_per_month":4}]"#).unwrap();
        assert_eq!(plans[0].description, "");
        assert!(!plans[0].popular);
    }

    #[test]
    fn object_instead_of_list_is_a_decode_error() {
        let err = parse_plans(r#"{"plans": []}"#).unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn html_error_page_is_a_decode_error() {
        let err = parse_plans("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }
}
