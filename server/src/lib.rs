//! Backend for the document/project management site.
//!
//! Serves the server-rendered shell pages and holds the privileged
//! admin client used by the rest of the stack. Routes:
//! - `/` always redirects to `/login`, any method
//! - `/login` document shell
//! - `/files/viewer` document shell with the inline PDF viewer config
//!
//! # Setup
//!
//! The server reads `RUST_PORT` from the environment and the service
//! account JSON from `/run/secrets/FIREBASE_SERVICE_ACCOUNT`; both are
//! checked at startup and misconfiguration is fatal.
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{any, get},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod admin;
pub mod config;
pub mod debounce;
pub mod encode;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod viewer;

use routes::{login_handler, root_handler, viewer_handler};
use state::State;

pub fn router() -> Router {
    Router::new()
        .route("/", any(root_handler))
        .route("/login", get(login_handler))
        .route("/files/viewer", get(viewer_handler))
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = router().layer(cors);

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
