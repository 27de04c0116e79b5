//! explore-gateway — the orchestrator's HTTP entrypoint.

use clap::Parser;
use explore_agent::SessionStore;
use explore_gateway::config;
use explore_gateway::server::build_router;
use explore_gateway::state::AppState;
use explore_llm::{AnthropicAdapter, MockAdapter, ModelAdapter};
use explore_tools::create_default_registry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "explore-gateway",
    about = "Streaming multi-agent educational-conversation orchestrator"
)]
struct Cli {
    /// Path to the YAML config file.
    #[arg(short = 'f', long = "config", default_value = "etc/explore.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("explore=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = config::load(&cli.config)?;
    tracing::info!(bind = %config.bind_addr(), use_ai_model = config.use_ai_model, "loaded configuration");

    let adapter: Arc<dyn ModelAdapter> = build_adapter(&config);

    let tools = Arc::new(create_default_registry());
    let sessions = Arc::new(SessionStore::new());
    sessions.spawn_sweeper();

    let state = Arc::new(AppState::new(sessions, tools, adapter, config.use_ai_model));
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "explore-gateway listening");
    axum::serve(listener, router).await?;
    Ok(())
}

fn build_adapter(config: &config::GatewayConfig) -> Arc<dyn ModelAdapter> {
    if !config.use_ai_model {
        return Arc::new(MockAdapter::echo());
    }
    match std::env::var("ANTHROPIC_API_KEY") {
        Ok(api_key) => {
            let model = config
                .text_generation_models
                .first()
                .cloned()
                .unwrap_or_else(|| "claude-3-5-sonnet-latest".to_string());
            let mut adapter = AnthropicAdapter::new(api_key, model);
            if let Some(base_url) = &config.eino_base_url {
                adapter = adapter.with_base_url(base_url.clone());
            }
            Arc::new(adapter)
        }
        Err(_) => {
            tracing::warn!(
                "USE_AI_MODEL is true but ANTHROPIC_API_KEY is unset, falling back to the mock adapter"
            );
            Arc::new(MockAdapter::echo())
        }
    }
}
