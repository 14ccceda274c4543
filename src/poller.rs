use crate::alert::AlertEngine;
use crate::config::Config;
use crate::domain::PriceQuote;
use crate::gas::EtherscanGasOracle;
use crate::notifier::NotifierHub;
use crate::price::BirdeyePriceProvider;
use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Sustained provider outages back off up to this ceiling.
const MAX_BACKOFF: Duration = Duration::from_secs(300);

/// What a single poll pass did. `tick` only returns `Err` when alert
/// delivery fails; everything else degrades into one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    PriceUnavailable,
    BelowThreshold(f64),
    Alerted { price: f64, gas: Option<f64> },
}

pub struct Poller {
    config: Config,
    alert_engine: AlertEngine,
    price_provider: BirdeyePriceProvider,
    gas_oracle: EtherscanGasOracle,
    notifier: NotifierHub,
}

impl Poller {
    pub fn new(
        config: Config,
        alert_engine: AlertEngine,
        price_provider: BirdeyePriceProvider,
        gas_oracle: EtherscanGasOracle,
        notifier: NotifierHub,
    ) -> Self {
        Self {
            config,
            alert_engine,
            price_provider,
            gas_oracle,
            notifier,
        }
    }

    /// One poll pass: fetch, evaluate, and when the threshold is met, alert
    /// and report the gas price.
    pub async fn tick(&self) -> Result<TickOutcome> {
        let Some(value) = self.price_provider.fetch(&self.config.token_address).await else {
            return Ok(TickOutcome::PriceUnavailable);
        };

        let quote = PriceQuote {
            token_address: self.config.token_address.clone(),
            value,
        };
        info!(
            "💰 {} at {:.2} (threshold {:.2})",
            quote.token_address, quote.value, self.config.threshold
        );

        let Some(alert) = self.alert_engine.should_alert(&quote) else {
            return Ok(TickOutcome::BelowThreshold(value));
        };

        self.notifier.send(&alert).await?;

        let gas = self.gas_oracle.safe_gas_price().await;
        match gas {
            Some(gwei) => {
                println!("Gas price is below the threshold. Current safe gas price: {gwei}")
            }
            None => println!("Gas price is above the threshold or couldn't be fetched."),
        }

        Ok(TickOutcome::Alerted { price: value, gas })
    }

    /// Run the monitoring loop until the process is killed. Consecutive
    /// failed fetches stretch the sleep; any other outcome resets it.
    pub async fn run(&self) -> Result<()> {
        info!(
            "👁️  Watching token {} on {}",
            self.config.token_address, self.config.chain_name
        );
        info!(
            "🔔 Alerting at price >= {:.2}, polling every {}s",
            self.config.threshold, self.config.poll_interval
        );

        let base = Duration::from_secs(self.config.poll_interval);
        let mut consecutive_failures: u32 = 0;

        loop {
            let outcome = self.tick().await?;
            consecutive_failures = match outcome {
                TickOutcome::PriceUnavailable => consecutive_failures.saturating_add(1),
                _ => 0,
            };
            sleep(backoff_delay(base, consecutive_failures)).await;
        }
    }
}

fn backoff_delay(base: Duration, consecutive_failures: u32) -> Duration {
    if consecutive_failures == 0 {
        return base;
    }
    // 2^10 of any base interval is already past the cap.
    let factor = 2u32.saturating_pow(consecutive_failures.min(10));
    base.saturating_mul(factor).min(MAX_BACKOFF)
}
