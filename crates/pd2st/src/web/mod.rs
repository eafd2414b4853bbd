mod handlers;

use crate::config::Settings;
use crate::prelude::{eprintln, *};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the converter web page")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, default_value = "8501")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub http: reqwest::Client,
}

/// Routes spend the configured key, so no cross-origin access is granted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/download", post(handlers::download))
        .route("/api/convert", post(handlers::api_convert))
        .with_state(state)
}

pub async fn run(app: App, global: crate::Global, settings: Settings) -> Result<()> {
    let addr = f!("{}:{}", app.host, app.port);

    if settings.api_key.is_none() {
        log::warn!("No API key configured; generation requests will be refused");
    }

    let state = AppState {
        settings: Arc::new(settings),
        http: reqwest::Client::new(),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{}", addr);
    if global.verbose {
        eprintln!("Converter listening on http://{}", addr);
    }

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
