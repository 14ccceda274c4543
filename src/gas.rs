use serde_json::Value;
use tracing::warn;

use crate::utils::mask_url;

pub const ETHERSCAN_BASE_URL: &str = "https://api.etherscan.io";

/// Etherscan gas tracker lookup. The `result` field is polymorphic (an
/// object on success, an error string otherwise), so the response is probed
/// value-by-value instead of deserialized into a fixed shape.
pub struct EtherscanGasOracle {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl EtherscanGasOracle {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(ETHERSCAN_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Current safe gas price in gwei, or `None` on any failure.
    pub async fn safe_gas_price(&self) -> Option<f64> {
        let url = format!(
            "{}/api?module=gastracker&action=gasoracle&apikey={}",
            self.base_url, self.api_key
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to reach gas oracle {}: {}", mask_url(&url), e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Failed to fetch gas price. Status code: {}",
                response.status().as_u16()
            );
            return None;
        }

        let json = match response.json::<Value>().await {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to parse gas oracle response: {}", e);
                return None;
            }
        };

        if json.get("status").and_then(Value::as_str) != Some("1") {
            let message = json
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            warn!("Gas oracle returned an error: {}", message);
            return None;
        }

        let safe = json
            .get("result")
            .and_then(|result| result.get("SafeGasPrice"))
            .and_then(|price| match price {
                Value::String(s) => s.parse::<f64>().ok(),
                other => other.as_f64(),
            });
        if safe.is_none() {
            warn!("Safe gas price not found in oracle response");
        }
        safe
    }
}
