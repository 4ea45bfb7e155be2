use crate::api::{CancelSource, CancelToken};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    /// Per-visitor view state keyed by the session cookie.
    pub sessions: SessionStore,
    pub client: reqwest::Client,
    pub backend_url: String,
    pub public_base_url: String,
    pub spline_scene_url: String,
    pub custom_css: Option<String>,
    /// Fired on graceful shutdown; every backend call listens to it.
    pub shutdown: CancelSource,
}

impl AppState {
    pub fn new(client: reqwest::Client, backend_url: String) -> Self {
        Self {
            sessions: SessionStore::default(),
            client,
            backend_url,
            public_base_url: String::new(),
            spline_scene_url: crate::config::DEFAULT_SPLINE_SCENE_URL.to_string(),
            custom_css: None,
            shutdown: CancelSource::new(),
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.shutdown.token()
    }
}
