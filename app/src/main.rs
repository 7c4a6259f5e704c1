use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pf_catalog::PricingCatalog;
use pf_server::AppState;

#[derive(Debug, Parser)]
#[command(name = "printforge", version, about = "PrintForge estimation service")]
struct Args {
    /// Address to bind
    #[arg(long, env = "PRINTFORGE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PRINTFORGE_PORT", default_value_t = 3625)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "printforge=info,pf_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting PrintForge v{}...", env!("CARGO_PKG_VERSION"));
    let catalog = PricingCatalog::global();
    info!(
        materials = catalog.materials.len(),
        quality_tiers = catalog.quality_tiers.len(),
        post_processing = catalog.post_processing.len(),
        "Pricing catalog loaded"
    );

    let router = pf_server::build_router(AppState::new());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    // Serve until ctrl-c; in-flight estimates finish first
    let _ = tokio::signal::ctrl_c().await;
}
