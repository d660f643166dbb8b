use t3bot::config::Settings;
use t3bot::notification::HttpMatrixClient;
use t3bot::Service;

use anyhow::Context;
use chrono::Utc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("t3bot=info".parse()?),
        )
        .init();

    info!("t3bot starting - CoinMarketCap rank notifier");

    let settings = Settings::load()?;
    info!("Configuration loaded successfully");

    let access_token = settings
        .credentials
        .matrix_access_token
        .clone()
        .context("MATRIX_ACCESS_TOKEN is not set")?;
    let client = HttpMatrixClient::new(settings.matrix.clone(), access_token);
    let service = Service::new(&settings);

    info!(
        interval_secs = service.polling_interval().as_secs(),
        rooms = settings.rank.rooms.len(),
        "polling for {} rank",
        settings.rank.symbol
    );

    loop {
        let next = service.on_poll(&client).await;
        let wait = (next - Utc::now()).to_std().unwrap_or_default();
        info!(next = %next, "Sleeping until next poll...");
        tokio::time::sleep(wait).await;
    }
}
