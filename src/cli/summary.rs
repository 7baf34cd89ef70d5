//! Summary command implementation

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::report;
use crate::schedule;
use crate::series::load_prices;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Path to JSON price history (overrides config)
    #[arg(long)]
    pub prices: Option<PathBuf>,

    /// Years to cover, comma separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub years: Option<Vec<i32>>,

    /// Output format: json or table
    #[arg(long, default_value = "table")]
    pub format: String,
}

impl SummaryArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let prices_path = self
            .prices
            .as_ref()
            .unwrap_or(&config.input.prices_path);
        let series = load_prices(prices_path)?;
        let years = self.years.as_deref().unwrap_or(&config.payout.years);

        let params = config.payout_params();
        let (_, summaries) = schedule::compute(&series, &params, years);

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&summaries)?),
            "table" => {
                for summary in &summaries {
                    print!("{}", report::format_summary_block(summary));
                }
            }
            other => anyhow::bail!("unknown output format: {other}"),
        }
        Ok(())
    }
}
