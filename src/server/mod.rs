//! HTTP server
//!
//! The application is a plain tower service ([`app`]) so it can be driven
//! in-process by tests. [`serve`] binds it to a TCP listener through hyper and
//! runs until Ctrl-C.

mod access_log;
mod response;
mod routes;

pub use access_log::{AccessLog, AccessLogLayer};
pub use response::{ApiError, ApiResponse};
pub use routes::{handle, Router, ENDPOINTS, MAX_BODY_BYTES};

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use hyper_util::service::TowerToHyperService;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tower::ServiceBuilder;
use tower_http::cors::{Cors, CorsLayer};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::generator::ServerInfo;

/// How long open connections get to finish after shutdown is requested.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub info: ServerInfo,
    pub started: Instant,
}

impl AppState {
    pub fn new(info: ServerInfo) -> Self {
        Self { info, started: Instant::now() }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Server startup and runtime failures
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type App = AccessLog<Cors<Router>>;

/// The full middleware stack around the router.
pub fn app(state: Arc<AppState>) -> App {
    ServiceBuilder::new()
        .layer(AccessLogLayer::new())
        .layer(CorsLayer::permissive())
        .service(Router::new(state))
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;
    let state = Arc::new(AppState::new(config.info()));

    serve_with_shutdown(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for Ctrl-C, running until killed: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Accept connections on `listener` until `shutdown` resolves, then give open
/// connections [`DRAIN_TIMEOUT`] to finish.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()>,
{
    let local = listener.local_addr()?;
    info!("{} v{} listening on http://{}", state.info.name, state.info.version, local);

    let service = app(state);
    let mut connections = JoinSet::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!("Failed to accept connection: {}", e);
                        continue;
                    }
                };
                let svc = TowerToHyperService::new(service.clone());
                connections.spawn(async move {
                    let builder = auto::Builder::new(TokioExecutor::new());
                    if let Err(e) = builder.serve_connection(TokioIo::new(stream), svc).await {
                        debug!("Connection from {} ended with error: {}", peer, e);
                    }
                });
            }
            _ = &mut shutdown => {
                info!("Shutdown requested, draining {} connection(s)", connections.len());
                break;
            }
        }

        while connections.try_join_next().is_some() {}
    }

    let drained =
        tokio::time::timeout(DRAIN_TIMEOUT, async { while connections.join_next().await.is_some() {} })
            .await;
    if drained.is_err() {
        warn!("Closing {} connection(s) still open after {:?}", connections.len(), DRAIN_TIMEOUT);
        connections.shutdown().await;
    }

    info!("Server stopped");
    Ok(())
}
