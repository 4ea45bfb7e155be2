mod support;

use std::time::Duration;

use mintly::api::{self, BackendError, CancelSource, CancelToken};
use mintly::models::{BillingCycle, LeadSubmission, SubscriberDetails, SubscriptionRequest};
use support::{StubBackend, StubConfig, THREE_PLANS};

#[tokio::test]
async fn plans_keep_backend_order() {
    api::set_silent(true);
    let backend = StubBackend::start(StubConfig {
        plans_body: THREE_PLANS.to_string(),
        ..StubConfig::default()
    })
    .await;

    let plans = api::load_plans(&reqwest::Client::new(), &backend.url, &CancelToken::never())
        .await
        .unwrap();

    let names: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Basic", "Plus", "Unlimited"]);
    assert!(plans[1].popular);
    assert_eq!(plans[2].price_label(BillingCycle::Monthly), "$49.5");
    assert_eq!(backend.plan_hits(), 1);
}

#[tokio::test]
async fn plans_error_status_is_reported() {
    api::set_silent(true);
    let backend = StubBackend::start(StubConfig {
        plans_status: 500,
        ..StubConfig::default()
    })
    .await;

    let err = api::load_plans(&reqwest::Client::new(), &backend.url, &CancelToken::never())
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Status(500)));
}

#[tokio::test]
async fn malformed_plans_are_a_decode_error() {
    api::set_silent(true);
    let backend = StubBackend::start(StubConfig {
        plans_body: "<html>oops</html>".to_string(),
        ..StubConfig::default()
    })
    .await;

    let err = api::load_plans(&reqwest::Client::new(), &backend.url, &CancelToken::never())
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    api::set_silent(true);
    // Bind then drop so nothing is listening on the port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = api::load_plans(&reqwest::Client::new(), &url, &CancelToken::never())
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Network(_)));
}

#[tokio::test]
async fn lead_is_posted_verbatim() {
    api::set_silent(true);
    let backend = StubBackend::start(StubConfig::default()).await;
    let lead = LeadSubmission {
        name: "Alex Johnson".into(),
        email: "alex@email.com".into(),
        phone: "".into(),
        message: "Franchise in Austin".into(),
    };

    api::submit_lead(&reqwest::Client::new(), &backend.url, &lead, &CancelToken::never())
        .await
        .unwrap();

    assert_eq!(
        backend.leads(),
        vec![serde_json::json!({
            "name": "Alex Johnson",
            "email": "alex@email.com",
            "phone": "",
            "message": "Franchise in Austin"
        })]
    );
}

#[tokio::test]
async fn subscription_failure_status_is_an_error() {
    api::set_silent(true);
    let backend = StubBackend::start(StubConfig {
        subscribe_status: 422,
        ..StubConfig::default()
    })
    .await;
    let plans = api::load_plans(&reqwest::Client::new(), &backend.url, &CancelToken::never())
        .await
        .unwrap();
    let details = SubscriberDetails {
        name: "Sam".into(),
        email: "sam@email.com".into(),
        ..SubscriberDetails::default()
    };
    let request = SubscriptionRequest::new(&details, &plans[0], BillingCycle::Yearly);

    let err = api::submit_subscription(&reqwest::Client::new(), &backend.url, &request, &CancelToken::never())
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Status(422)));
    let sent = backend.subscriptions();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["plan_name"], "Basic");
    assert_eq!(sent[0]["billing_cycle"], "yearly");
    assert_eq!(sent[0]["status"], "pending");
}

#[tokio::test]
async fn cancelling_abandons_a_slow_call() {
    api::set_silent(true);
    let backend = StubBackend::start(StubConfig {
        delay: Some(Duration::from_secs(30)),
        ..StubConfig::default()
    })
    .await;
    let source = CancelSource::new();
    let token = source.token();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        source.cancel();
    });

    let started = std::time::Instant::now();
    let err = api::load_plans(&reqwest::Client::new(), &backend.url, &token)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn already_cancelled_token_sends_nothing() {
    api::set_silent(true);
    let backend = StubBackend::start(StubConfig::default()).await;
    let source = CancelSource::new();
    source.cancel();

    let err = api::load_plans(&reqwest::Client::new(), &backend.url, &source.token())
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(backend.plan_hits(), 0);
}
