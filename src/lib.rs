pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod emotion;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        Some(handle)
    } else {
        None
    };

    init_logging(&config)?;

    match cli.command {
        None | Some(Commands::Serve) => run_server(config, prometheus_handle).await,
        Some(Commands::Map { phrase }) => cli::cmd_map(&phrase.join(" ")),
        Some(Commands::Emotions) => cli::cmd_emotions(),
        Some(Commands::Search {
            query,
            emotion,
            pages,
        }) => cli::cmd_search(&config, &query.join(" "), emotion.as_deref(), pages).await,
        Some(Commands::Trending { limit }) => cli::cmd_trending(&config, limit).await,
        Some(Commands::Download { gif_id, output }) => {
            cli::cmd_download(&config, &gif_id, output).await
        }
        Some(Commands::Share { gif_id }) => cli::cmd_share(&config, &gif_id).await,
        Some(Commands::InitConfig) => cli::cmd_init(),
    }
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = if config.general.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let (layer, task) = tracing_loki::builder()
            .label("app", "moodgif")?
            .extra_field("env", "production")?
            .build_url(url)?;

        tokio::spawn(task);

        registry.with(layer).init();
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    } else {
        registry.init();
    }

    Ok(())
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("moodgif v{} starting...", env!("CARGO_PKG_VERSION"));

    if config.giphy.api_key.is_empty() {
        error!(
            "No GIPHY API key configured; set {} or giphy.api_key. GIF requests will fail",
            config::GIPHY_API_KEY_ENV
        );
    }

    let port = config.server.port;
    let api_state = api::create_app_state_from_config(config, prometheus_handle)?;
    let app = api::router(api_state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Web server running at http://0.0.0.0:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {e}"),
    }
}
