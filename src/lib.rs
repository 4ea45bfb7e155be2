//! Mintly Wash landing site.
//!
//! Server-rendered marketing page for the Mintly Wash membership program. The page
//! talks to an external backend for the plan catalog, lead capture and subscriptions;
//! this crate only renders view state and relays those calls.

pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod templates;
pub mod utils;

pub use models::AppState;
pub use routes::build_router;
