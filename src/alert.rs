use crate::domain::{Alert, PriceQuote};

#[derive(Debug, Clone)]
pub struct AlertEngine {
    threshold: f64,
}

impl AlertEngine {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// A quote at or above the threshold produces an alert; the comparison
    /// is inclusive, so hitting the threshold exactly fires.
    pub fn should_alert(&self, quote: &PriceQuote) -> Option<Alert> {
        if quote.value >= self.threshold {
            Some(Alert::new(
                "Price Threshold Reached",
                format!(
                    "Your favourite token {} currently at price {:.2}",
                    quote.token_address, quote.value
                ),
            ))
        } else {
            None
        }
    }
}
