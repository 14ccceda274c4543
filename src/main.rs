// Price Checker - polls a token price and alerts Opsgenie past a threshold

use anyhow::Result;
use price_checker::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    info!("🏗️  Starting Price Checker");
    let config = Config::from_args();
    price_checker::run(config).await
}
