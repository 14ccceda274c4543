use serde::Deserialize;
use tracing::warn;

use crate::utils::mask_url;

pub const BIRDEYE_BASE_URL: &str = "https://public-api.birdeye.so";

#[derive(Debug, Deserialize)]
struct PriceResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<PriceData>,
}

#[derive(Debug, Deserialize)]
struct PriceData {
    #[serde(default)]
    value: Option<f64>,
}

pub struct BirdeyePriceProvider {
    client: reqwest::Client,
    base_url: String,
    chain_name: String,
    api_key: String,
}

impl BirdeyePriceProvider {
    pub fn new(chain_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(BIRDEYE_BASE_URL, chain_name, api_key)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        chain_name: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            chain_name: chain_name.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the current price for a token. Every failure path degrades to
    /// `None`: the caller treats an absent quote as "skip this iteration".
    pub async fn fetch(&self, token_address: &str) -> Option<f64> {
        let url = format!("{}/defi/price?address={}", self.base_url, token_address);

        let response = match self
            .client
            .get(&url)
            .header("accept", "application/json")
            .header("x-chain", &self.chain_name)
            .header("X-API-KEY", &self.api_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to reach price provider {}: {}", mask_url(&url), e);
                return None;
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("Failed to fetch token price. Status code: {}", status.as_u16());
            return None;
        }

        let body = match response.json::<PriceResponse>().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to parse price response for {}: {}", token_address, e);
                return None;
            }
        };

        if !body.success {
            warn!(
                "Failed to fetch token price: {}",
                body.message.as_deref().unwrap_or("no message from provider")
            );
            return None;
        }

        match body.data.and_then(|data| data.value) {
            Some(value) => Some(value),
            None => {
                warn!("Token price not found in response");
                None
            }
        }
    }
}
