use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uncany::{EdgeSettings, build_from_settings};

/// Serves account deletion and the school directory proxy from one process.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = EdgeSettings::load()?;

    let edge_service = build_from_settings(&settings).await?;

    let listener = tokio::net::TcpListener::bind(&settings.server.address).await?;
    tracing::info!(address = %settings.server.address, "Starting edge service...");

    edge_service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
