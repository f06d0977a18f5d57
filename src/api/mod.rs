pub mod error;
pub mod order;
pub mod page;

use std::{
    net::Ipv4Addr,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Result;
use axum::{Router, extract::FromRef, http::Request, routing};
use tokio::net::TcpListener;

use crate::gateway::OrderGateway;

#[derive(Clone)]
pub struct AppState<G> {
    pub gateway: G,
    pub page: PagePath,
}

impl<G: OrderGateway> AppState<G> {
    pub fn new(gateway: G, page: impl Into<PathBuf>) -> Self {
        Self {
            gateway,
            page: PagePath(Arc::new(page.into())),
        }
    }
}

/// Location of the checkout page template on disk.
#[derive(Debug, Clone)]
pub struct PagePath(Arc<PathBuf>);

impl PagePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl<G> FromRef<AppState<G>> for PagePath {
    fn from_ref(state: &AppState<G>) -> Self {
        state.page.clone()
    }
}

pub fn router<G: OrderGateway>(state: AppState<G>) -> Router {
    let layer = tower_http::trace::TraceLayer::new_for_http()
        .on_request(|request: &Request<_>, _: &tracing::Span| {
            tracing::debug!(method = ?request.method(), url = ?request.uri(), "req");
        })
        .on_response(
            |response: &axum::http::Response<_>, latency: Duration, _: &tracing::Span| {
                tracing::debug!(status = ?response.status(), ?latency, "res");
            },
        );

    Router::new()
        .route("/", routing::get(page::render))
        .route(
            "/createOrder",
            routing::get(order::create::<G>).post(order::create::<G>),
        )
        .layer(layer)
        .with_state(state)
}

pub async fn serve<G: OrderGateway>(port: u16, state: AppState<G>) -> Result<()> {
    tracing::info!("starting API");

    let app = router(state);

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
    tracing::info!("server starting on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}

/// Resolves once `signal` fires. A signal handler that fails to install
/// never resolves, so the server keeps running.
async fn shutdown_on(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => tracing::info!("shutting down"),
        Err(err) => {
            tracing::error!(?err, "shutdown_signal");
            std::future::pending::<()>().await
        }
    }
}
