pub mod alert;
pub mod config;
pub mod domain;
pub mod gas;
pub mod notifier;
pub mod poller;
pub mod price;
pub mod utils;

use alert::AlertEngine;
use config::Config;
use gas::EtherscanGasOracle;
use notifier::{ConsoleNotifier, NotifierHub, OpsgenieNotifier};
use poller::Poller;
use price::BirdeyePriceProvider;

use anyhow::Result;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let alert_engine = AlertEngine::new(config.threshold);
    let price_provider = BirdeyePriceProvider::new(&config.chain_name, &config.api_key);
    let gas_oracle = EtherscanGasOracle::new(&config.etherscan_api_key);

    let console = ConsoleNotifier::new();
    let opsgenie = OpsgenieNotifier::maybe_from_config(&config);
    if opsgenie.is_some() {
        info!("🚨 Opsgenie alerting enabled");
    } else {
        info!("🚨 Opsgenie alerting disabled (no API key) - alerts stay on the console");
    }
    let notifier = NotifierHub::new(console, opsgenie);

    let poller = Poller::new(config, alert_engine, price_provider, gas_oracle, notifier);
    poller.run().await
}
