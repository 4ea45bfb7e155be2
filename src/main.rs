use std::net::SocketAddr;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use mintly::api::{self, BackendError, CancelToken};
use mintly::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use mintly::models::{AppState, BillingCycle, LeadSubmission, Plan, SubscriberDetails, SubscriptionRequest};
use mintly::session::{
    LEAD_FAILURE_MESSAGE, LEAD_SUCCESS_MESSAGE, SUBSCRIBE_FAILURE_MESSAGE, SUBSCRIBE_SUCCESS_MESSAGE,
};
use mintly::utils::hostname_from_url;

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{}", yansi::Paint::new(msg.to_string()).red());
    process::exit(1);
}

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = match reqwest::Client::builder()
        .user_agent(format!("Mintly/{}", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            fail(format!("Failed to create HTTP client: {}", e));
        }
    };

    let mut state = AppState::new(client, config::get_backend_url());
    state.public_base_url = config::get_public_base_url();
    state.spline_scene_url = config::get_spline_scene_url();
    state
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(%e, "Failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received; cancelling backend calls");
    state.shutdown.cancel();
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };

    if state.public_base_url.is_empty() {
        state.public_base_url = format!("http://{}", addr);
    }

    let app = mintly::build_router(state.clone());
    tracing::info!(%addr, backend = %state.backend_url, "Starting Mintly Wash server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal(state))
                .await
            {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

/// Fetch the catalog behind a spinner so slow backends don't look like a hang.
async fn fetch_plans_with_spinner(state: &AppState) -> Result<Vec<Plan>, BackendError> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Fetching plans from {}", hostname_from_url(&state.backend_url)));
    pb.enable_steady_tick(Duration::from_millis(100));
    let result = api::load_plans(&state.client, &state.backend_url, &CancelToken::never()).await;
    pb.finish_and_clear();
    result
}

fn print_plans(plans: &[Plan], cycle: BillingCycle) {
    if plans.is_empty() {
        println!("(no plans available)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["Name", "Description", "Price", "Washes / month", "Popular"]);
    for plan in plans {
        table.add_row(vec![
            Cell::new(&plan.name),
            Cell::new(&plan.description),
            Cell::new(format!("{}/{}", plan.price_label(cycle), cycle.period())),
            Cell::new(plan.washes_per_month),
            Cell::new(if plan.popular { "yes" } else { "" }),
        ]);
    }
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "mintly",
    author,
    version,
    about = "Mintly Wash landing site",
    long_about = r#"Mintly Wash: the membership landing page and a few helpers around its backend.

The web server renders the landing page and relays plan, lead and subscription
calls to the backend configured by BACKEND_URL (or `--env-file`).

Examples:
  1) Run the site (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Look at the catalog the page would show:
      mintly plans --billing yearly
"#,
    after_help = "Use `mintly <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration and backend reachability
    #[command(long_about = "Check that BACKEND_URL is usable and that the backend answers GET /plans with a plan list.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Show the plan catalog
    Plans {
        /// Billing cycle whose price is shown (monthly|yearly)
        #[arg(long, default_value_t = BillingCycle::Monthly)]
        billing: BillingCycle,
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Send a contact request
    Lead {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Start a membership for one of the listed plans
    #[command(long_about = "Create a pending subscription. The plan must be one the backend currently lists.")]
    Subscribe {
        /// Plan name exactly as listed by `mintly plans`
        #[arg(long)]
        plan: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        vehicle: String,
        #[arg(long, default_value_t = BillingCycle::Monthly)]
        billing: BillingCycle,
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // No subcommand serves the site with defaults
    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, env_file, stylesheet } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            if let Err(e) = config::validate_backend_url(&state.backend_url) {
                fail(e);
            }
            match fetch_plans_with_spinner(&state).await {
                Ok(plans) => {
                    println!(
                        "{} ({} plans from {})",
                        yansi::Paint::new("Configuration looks valid").green(),
                        plans.len(),
                        hostname_from_url(&state.backend_url)
                    );
                }
                Err(e) => fail(format!("Configuration appears invalid: {}", e)),
            }
        }
        Commands::Plans { billing, env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            match fetch_plans_with_spinner(&state).await {
                Ok(plans) => print_plans(&plans, billing),
                Err(e) => fail(format!("Failed to load plans: {}", e)),
            }
        }
        Commands::Lead { name, email, phone, message, env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            let lead = LeadSubmission { name, email, phone, message };
            match api::submit_lead(&state.client, &state.backend_url, &lead, &CancelToken::never()).await {
                Ok(()) => println!("{}", yansi::Paint::new(LEAD_SUCCESS_MESSAGE).green()),
                Err(e) => {
                    tracing::warn!(%e, "Lead submission failed");
                    fail(LEAD_FAILURE_MESSAGE);
                }
            }
        }
        Commands::Subscribe { plan, name, email, phone, vehicle, billing, env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            let plans = match fetch_plans_with_spinner(&state).await {
                Ok(p) => p,
                Err(e) => fail(format!("Failed to load plans: {}", e)),
            };
            let Some(selected) = plans.iter().find(|p| p.name == plan) else {
                fail(format!("Plan '{}' is not in the current catalog", plan));
            };
            let details = SubscriberDetails { name, email, phone, vehicle };
            let request = SubscriptionRequest::new(&details, selected, billing);
            match api::submit_subscription(&state.client, &state.backend_url, &request, &CancelToken::never()).await {
                Ok(()) => println!("{}", yansi::Paint::new(SUBSCRIBE_SUCCESS_MESSAGE).green()),
                Err(e) => {
                    tracing::warn!(%e, "Subscription failed");
                    fail(SUBSCRIBE_FAILURE_MESSAGE);
                }
            }
        }
    }
}
