//! # Vote
//!
//! Minimal voting front-end for canary deployment drills.
//!
//! Accepts a binary vote choice from a browser, tags it with a per-visitor
//! cookie identity, and appends it to a Redis list consumed by a downstream
//! tallier. A process-wide failure-injection switch (`/api/error-sim`) can
//! force every submission to fail with HTTP 500 so rollback automation can
//! be rehearsed against a single instance.
//!
//! ## Endpoints
//!
//! | Method | Path | Behavior |
//! |---|---|---|
//! | GET/POST | `/` | Renders the voting page; POST also submits a vote |
//! | GET | `/api/error-sim` | Current failure-injection state |
//! | POST | `/api/error-sim` | Flips the failure-injection switch |
//! | GET | `/health` | Liveness probe, independent of Redis and the switch |

use std::sync::Arc;

use axum::{Router, routing::get};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod identity;
pub mod queue;
pub mod render;
pub mod routes;
pub mod state;
pub mod toggle;

use routes::{
    error_sim_status_handler, error_sim_toggle_handler, health_handler, index_handler,
    vote_handler,
};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(index_handler).post(vote_handler))
        .route(
            "/api/error-sim",
            get(error_sim_status_handler).post(error_sim_toggle_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");
    let router = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, router)
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
