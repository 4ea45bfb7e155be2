//! A throwaway backend for integration tests: serves `/plans`, `/lead` and
//! `/subscribe` on an ephemeral port and records what it was sent.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

pub const BASIC_PLAN: &str = r#"[{"name":"Basic","price_monthly":19,"price_yearly":190,"washes_per_month":4,"popular":false}]"#;

pub const THREE_PLANS: &str = r#"[
  {"name":"Basic","description":"Exterior wash","price_monthly":19,"price_yearly":190,"washes_per_month":4,"popular":false},
  {"name":"Plus","description":"Exterior and interior","price_monthly":29,"price_yearly":290,"washes_per_month":8,"popular":true},
  {"name":"Unlimited","description":"Every day","price_monthly":49.5,"price_yearly":495,"washes_per_month":30,"popular":false}
]"#;

#[derive(Clone)]
pub struct StubConfig {
    pub plans_body: String,
    pub plans_status: u16,
    pub lead_status: u16,
    pub subscribe_status: u16,
    /// Applied to every route before it answers.
    pub delay: Option<Duration>,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            plans_body: BASIC_PLAN.to_string(),
            plans_status: 200,
            lead_status: 200,
            subscribe_status: 201,
            delay: None,
        }
    }
}

#[derive(Clone)]
struct StubState {
    config: StubConfig,
    plan_hits: Arc<AtomicUsize>,
    leads: Arc<Mutex<Vec<Value>>>,
    subscriptions: Arc<Mutex<Vec<Value>>>,
}

pub struct StubBackend {
    pub url: String,
    plan_hits: Arc<AtomicUsize>,
    leads: Arc<Mutex<Vec<Value>>>,
    subscriptions: Arc<Mutex<Vec<Value>>>,
}

impl StubBackend {
    pub async fn start(config: StubConfig) -> Self {
        let state = StubState {
            config,
            plan_hits: Arc::new(AtomicUsize::new(0)),
            leads: Arc::new(Mutex::new(Vec::new())),
            subscriptions: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/plans", get(plans))
            .route("/lead", post(lead))
            .route("/subscribe", post(subscribe))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend");
        });

        Self {
            url: format!("http://{}", addr),
            plan_hits: state.plan_hits,
            leads: state.leads,
            subscriptions: state.subscriptions,
        }
    }

    pub fn plan_hits(&self) -> usize {
        self.plan_hits.load(Ordering::SeqCst)
    }

    pub fn leads(&self) -> Vec<Value> {
        self.leads.lock().unwrap().clone()
    }

    pub fn subscriptions(&self) -> Vec<Value> {
        self.subscriptions.lock().unwrap().clone()
    }
}

async fn pause(config: &StubConfig) {
    if let Some(d) = config.delay {
        tokio::time::sleep(d).await;
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).expect("status code")
}

async fn plans(State(s): State<StubState>) -> (StatusCode, String) {
    s.plan_hits.fetch_add(1, Ordering::SeqCst);
    pause(&s.config).await;
    (status(s.config.plans_status), s.config.plans_body.clone())
}

async fn lead(State(s): State<StubState>, Json(body): Json<Value>) -> StatusCode {
    s.leads.lock().unwrap().push(body);
    pause(&s.config).await;
    status(s.config.lead_status)
}

async fn subscribe(State(s): State<StubState>, Json(body): Json<Value>) -> StatusCode {
    s.subscriptions.lock().unwrap().push(body);
    pause(&s.config).await;
    status(s.config.subscribe_status)
}
