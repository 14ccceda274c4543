use chrono::{DateTime, Utc};

/// A price observation for a single token, consumed at most once per poll.
#[derive(Debug, Clone)]
pub struct PriceQuote {
    pub token_address: String,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
