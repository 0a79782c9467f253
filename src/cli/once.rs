//! Once command implementation

use crate::config::Config;
use crate::feed::{IndodaxClient, PriceSource, TickerClientConfig};
use crate::presenter::format::clock_time;
use crate::presenter::PriceFormat;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct OnceArgs {
    /// Override the ticker endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print the sample as JSON
    #[arg(long)]
    pub json: bool,
}

impl OnceArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| config.feed.endpoint.clone());
        let client = IndodaxClient::with_config(TickerClientConfig::new(endpoint))?;

        let sample = client.fetch_once().await.map_err(|e| {
            tracing::error!(error = %e, kind = e.kind().as_str(), "Fetch failed");
            e
        })?;

        if self.json {
            println!("{}", serde_json::to_string(&sample)?);
        } else {
            let format = PriceFormat::from(&config.display);
            println!(
                "{}  {}  ({})",
                format.price(sample.value),
                clock_time(&sample.observed_at),
                config.feed.exchange
            );
        }

        Ok(())
    }
}
