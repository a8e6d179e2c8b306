//! hookline-server — the webhook HTTP surface.
//!
//! One form-encoded `POST` route (default `/deploy`) plus `GET /healthz`.
//! Requests are independent: the handler authenticates, runs the
//! [`Pipeline`], and hands any resulting event to the sink.

pub mod handler;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use hookline_core::{Config, EventSink, Pipeline, TokenAuthenticator};
use hookline_sink::FileSink;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub auth: Arc<TokenAuthenticator>,
    pub sink: Arc<dyn EventSink>,
}

impl AppState {
    pub fn new(pipeline: Pipeline, auth: TokenAuthenticator, sink: Arc<dyn EventSink>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            auth: Arc::new(auth),
            sink,
        }
    }

    /// Production state: configured labels and token, file sink.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let auth = config.auth.authenticator().context("invalid [auth] configuration")?;
        let sink = FileSink::open(&config.sink.path, config.sink.create_dirs)
            .context("cannot open event log")?;
        Ok(Self::new(Pipeline::new(config.labels.clone()), auth, Arc::new(sink)))
    }
}

/// Build the router with the webhook mounted at `path`.
pub fn router(state: AppState, path: &str) -> Router {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Router::new()
        .route(&path, post(handler::receive_hook))
        .route("/healthz", get(handler::healthz))
        .with_state(state)
}

/// Bind, serve until Ctrl-C.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid server.bind address {:?}", config.server.bind))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;

    tracing::info!(
        %addr,
        path = %config.server.path,
        sink = %config.sink.path.display(),
        "hookline listening"
    );
    axum::serve(listener, router(state, &config.server.path))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("hookline stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
