//! HTTP exporter host
//!
//! Serves a small help page at `/` and runs one scrape pass per request on
//! the telemetry path.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;

use crate::client::ControlDApi;
use crate::collector::{Mode, ScrapePass};
use crate::config::Config;
use crate::error::Result;
use crate::metrics::{MetricSink, exposition};

/// Shared state for request handlers
#[derive(Clone)]
pub struct ExporterState {
    client: Arc<dyn ControlDApi>,
    mode: Mode,
    telemetry_path: Arc<str>,
    /// `host:port` the exporter is reachable on, shown on the help page
    listen_address: Arc<str>,
}

impl ExporterState {
    pub fn new(
        client: Arc<dyn ControlDApi>,
        mode: Mode,
        telemetry_path: &str,
        listen_address: &str,
    ) -> Self {
        Self {
            client,
            mode,
            telemetry_path: Arc::from(telemetry_path),
            listen_address: Arc::from(listen_address),
        }
    }
}

/// Build the exporter router.
pub fn build_router(state: ExporterState) -> Router {
    let telemetry_path = state.telemetry_path.to_string();

    Router::new()
        .route("/", get(index))
        .route(&telemetry_path, get(metrics))
        .with_state(state)
}

async fn index(State(state): State<ExporterState>) -> Html<String> {
    let url = format!("http://{}{}", state.listen_address, state.telemetry_path);
    Html(format!(
        "<html>\
         <head><title>Control D Exporter</title></head>\
         <body>\
         <h1>Prometheus Control D Exporter</h1>\
         <p>Running in {mode} mode.</p>\
         <p>To fetch metrics from Control D, access the telemetry path:</p>\
         {url}\
         <p><b>Example:</b></p>\
         <ul><li><a href=\"{url}\">{url}</a></li></ul>\
         </body>\
         </html>",
        mode = state.mode,
    ))
}

async fn metrics(State(state): State<ExporterState>) -> Response {
    let mut sink = MetricSink::new();
    let pass = ScrapePass::new(state.client.as_ref(), state.mode);
    pass.collect(&mut sink).await;

    match exposition::render(sink.samples()) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, exposition::content_type())],
            body,
        )
            .into_response(),
        Err(e) => {
            log::error!("Failed to encode metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Bind the listener and serve until Ctrl+C.
pub async fn serve(config: &Config, client: Arc<dyn ControlDApi>) -> Result<()> {
    let listen_address = format!("{}:{}", config.listen_address, config.listen_port);
    let state = ExporterState::new(
        client,
        config.mode,
        &config.telemetry_path,
        &listen_address,
    );
    let router = build_router(state);

    let listener =
        TcpListener::bind((config.listen_address.as_str(), config.listen_port)).await?;
    log::info!(
        "Starting the {} exporter on port {}.",
        config.mode,
        config.listen_port
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Exporter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
