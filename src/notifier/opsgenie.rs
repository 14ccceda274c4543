use crate::config::Config;
use crate::domain::Alert;
use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::info;

pub const OPSGENIE_BASE_URL: &str = "https://api.opsgenie.com";

#[derive(Debug, Clone, Serialize)]
pub struct Responder {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Responder {
    fn team(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "team".to_string(),
        }
    }
}

/// Opsgenie create-alert wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct AlertPayload {
    pub message: String,
    pub description: String,
    pub responders: Vec<Responder>,
    pub visible_to: Vec<Responder>,
    pub note: String,
    pub user: String,
    pub priority: String,
    pub source: String,
}

impl AlertPayload {
    pub fn from_alert(alert: &Alert) -> Self {
        Self {
            message: format!("[Price-Checker] {}", alert.message),
            description: "Let's check on birdeye.so".to_string(),
            responders: vec![Responder::team("me")],
            visible_to: vec![Responder::team("me")],
            note: "This alert generated by price-checker".to_string(),
            user: "price-checker".to_string(),
            priority: "P3".to_string(),
            source: "Price Checker Tools".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpsgenieNotifier {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpsgenieNotifier {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OPSGENIE_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn maybe_from_config(config: &Config) -> Option<Self> {
        match &config.opsgenie_api_key {
            Some(key) if !key.is_empty() => Some(Self::new(key.clone())),
            _ => None,
        }
    }

    pub async fn send(&self, alert: &Alert) -> Result<()> {
        let payload = AlertPayload::from_alert(alert);
        let url = format!("{}/v2/alerts", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("GenieKey {}", self.api_key))
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            println!("Alert created in Opsgenie.");
            info!("Alert sent to Opsgenie: {}", alert.title);
            Ok(())
        } else {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(anyhow!(
                "Failed to create Opsgenie alert ({status}): {error_text}"
            ))
        }
    }
}
