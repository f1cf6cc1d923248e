//! # Bahi Café backend
//!
//! Small API behind the café site: the menu endpoint rebuilds the menu from
//! a published spreadsheet CSV on a revalidation interval, and the contact
//! endpoint relays inquiries by email behind a per-address rate limit.
//!
//! # Configuration
//!
//! Environment (see [`config::Config`]):
//! - `SHEET_CSV_URL` (required): published spreadsheet CSV export
//! - `RUST_PORT`: listen port, default 1111
//! - `MENU_REVALIDATE_SECS`: menu cache lifetime, default 60
//! - `RATE_LIMIT_WINDOW_SECS` / `RATE_LIMIT_MAX`: contact limiter, 60 / 5
//! - `SMTP_HOST`, `SMTP_USER`, `MAIL_FROM`, `MAIL_RECIPIENTS`: mail relay
//! - `/run/secrets/SMTP_PASSWORD`: relay credential
//!
//! # Routes
//!
//! - `GET /menu`: sorted sections as JSON, the sole contract with the
//!   rendering layer
//! - `POST /contact`: form-encoded inquiry, answered with `{"success":true}`

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod fetch;
pub mod mailer;
pub mod rate_limit;
pub mod routes;
pub mod state;

use routes::{contact_handler, menu_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/menu", get(menu_handler))
        .route("/contact", post(contact_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
