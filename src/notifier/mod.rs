mod console;
mod opsgenie;

pub use console::ConsoleNotifier;
pub use opsgenie::{AlertPayload, OpsgenieNotifier, Responder};

use crate::domain::Alert;
use anyhow::Result;

pub struct NotifierHub {
    console: ConsoleNotifier,
    opsgenie: Option<OpsgenieNotifier>,
}

impl NotifierHub {
    pub fn new(console: ConsoleNotifier, opsgenie: Option<OpsgenieNotifier>) -> Self {
        Self { console, opsgenie }
    }

    /// Console first, then Opsgenie when configured. An Opsgenie delivery
    /// failure propagates: losing an alert is the one error this system
    /// treats as fatal.
    pub async fn send(&self, alert: &Alert) -> Result<()> {
        self.console.send(alert).await?;

        if let Some(opsgenie) = &self.opsgenie {
            opsgenie.send(alert).await?;
        }

        Ok(())
    }
}
