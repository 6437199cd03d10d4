//! Axum HTTP server for the catalog.
//!
//! ## URL layout
//!
//! ```text
//! GET  /api/data[?search=<term>]   → JSON array of books
//! ```
//!
//! Everything else falls through to axum's defaults: `405` for other methods
//! on `/api/data`, `404` for unknown paths.

mod api;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::AppError;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler via [`axum::extract::State`].
///
/// `Catalog` is `Copy`, so cloning per request costs nothing.
#[derive(Clone)]
pub(crate) struct ApiState {
    pub catalog: Catalog,
}

// ── HttpServer ────────────────────────────────────────────────────────────────

/// A bound listener plus the router it will serve.
pub struct HttpServer {
    listener: TcpListener,
    router: Router,
}

impl HttpServer {
    /// Bind `bind_addr` and prepare the router. Port `0` picks a free port;
    /// read it back with [`HttpServer::local_addr`].
    pub async fn bind(bind_addr: &str, catalog: Catalog) -> Result<Self, AppError> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

        Ok(Self {
            listener,
            router: build_router(catalog),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, AppError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` is cancelled, then drain in-flight requests.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<(), AppError> {
        let addr = self.local_addr()?;
        info!(%addr, "http server listening");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(|e| AppError::Server(format!("axum server error: {e}")))?;

        info!(%addr, "http server shut down");
        Ok(())
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(catalog: Catalog) -> Router {
    Router::new()
        .route("/api/data", get(api::data))
        .with_state(ApiState { catalog })
}

// ── Tests ────────────────────────────────────────────────────────────────────
