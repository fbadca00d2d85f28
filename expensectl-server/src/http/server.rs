//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C (or any caller-supplied future),
//!   bounded by `shutdown_timeout`

use std::any::Any;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use crate::db::repos::ExpenseStore;

/// Default listen port
pub const DEFAULT_PORT: u16 = 2565;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:2565)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,

    /// How long in-flight requests get to finish after a shutdown signal
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            cors_permissive: false,
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ExpenseStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }
}

/// Build the application router with all routes, tracing and panic recovery.
///
/// CORS is layered on by `run_server`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::expenses::router())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

fn cors_layer(permissive: bool, port: u16) -> CorsLayer {
    if permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| format!("http://{}:{}", host, port).parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal {
        message: "request handler panicked".into(),
    }
    .into_response()
}

/// Run the HTTP server over the given store until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// migrations::run(&pool).await?;
/// run_server(Arc::new(ExpenseRepo::new(pool)), ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn ExpenseStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    serve_with_shutdown(listener, store, config, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// After `shutdown` fires, in-flight requests get `config.shutdown_timeout`
/// to finish; past that the server returns without waiting for them.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    store: Arc<dyn ExpenseStore>,
    config: ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = Arc::new(AppState::new(store));
    let local_addr = listener.local_addr()?;
    let cors = cors_layer(config.cors_permissive, local_addr.port());
    let app = build_router(state).layer(cors);

    tracing::info!("Server listening on {}", local_addr);

    let signalled = Arc::new(Notify::new());
    let notify = signalled.clone();
    let graceful = async move {
        shutdown.await;
        notify.notify_one();
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(graceful)
        .into_future();

    let deadline = async {
        signalled.notified().await;
        tokio::time::sleep(config.shutdown_timeout).await;
    };

    tokio::select! {
        result = server => result?,
        _ = deadline => {
            tracing::warn!(
                timeout_ms = config.shutdown_timeout.as_millis() as u64,
                "Shutdown timed out, dropping in-flight requests"
            );
        }
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
