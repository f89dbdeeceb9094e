use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use facedet_core::DetectParams;
use facedet_pipeline::{DetectionPipeline, PipelineConfig};

mod api;
mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!("facedet v{}", env!("CARGO_PKG_VERSION"));

    // Load or create config.
    let mut config = if let Some(config_path) = &cli.config {
        let data = std::fs::read_to_string(config_path)?;
        serde_json::from_str(&data)?
    } else {
        PipelineConfig::default()
    };

    if let Some(model) = &cli.model {
        config.model_path = model.to_string_lossy().into_owned();
    }

    match cli.command {
        Command::Serve { host, port } => {
            serve(config, &host, port).await?;
        }
        Command::Detect {
            input,
            scale,
            neighbors,
            min,
            format,
        } => {
            let pipeline = DetectionPipeline::build(config);
            let params = DetectParams {
                scale,
                neighbors,
                min_size: min,
            };
            cli::detect_file(&pipeline, &input, &params, &format)?;
        }
    }

    Ok(())
}

async fn serve(config: PipelineConfig, host: &str, port: u16) -> anyhow::Result<()> {
    // Initialize Prometheus metrics exporter.
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install metrics recorder");

    // The cascade model is loaded lazily by the first request, not here.
    let pipeline = DetectionPipeline::build(config);

    let state = Arc::new(api::AppState {
        pipeline,
        start_time: Instant::now(),
        metrics: metrics_handle,
    });

    // Build router with middleware.
    let app = api::create_router(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive());

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    tracing::info!(%addr, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
