mod analysis;
mod assessment;
mod clock;
mod config;
mod errors;
mod llm_client;
mod models;
mod planning;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::llm::LlmNarrativeAnalyzer;
use crate::analysis::pipeline::NarrativeAnalysisPipeline;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize text-analysis client
    let llm = LlmClient::new(config.llm_settings())?;
    if config.analysis_api_key.is_none() {
        warn!("ANALYSIS_API_KEY is not set; narrative analysis will use the keyword fallback");
    }
    info!(
        "Text-analysis client initialized (model: {}, timeout: {}s)",
        llm.model(),
        config.analysis_timeout.as_secs()
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let pipeline = NarrativeAnalysisPipeline::new(
        Arc::new(LlmNarrativeAnalyzer(llm)),
        Arc::clone(&clock),
        config.analysis_timeout,
    );

    let state = AppState {
        clock,
        pipeline: Arc::new(pipeline),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
