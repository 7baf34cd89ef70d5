//! Compute command implementation

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::report;
use crate::schedule::{self, PayoutRecord};
use crate::series::load_prices;
use crate::summary::YearSummary;

#[derive(Args, Debug)]
pub struct ComputeArgs {
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

#[derive(Serialize)]
struct ComputeOutput<'a> {
    records: &'a [PayoutRecord],
    summaries: &'a [YearSummary],
}

impl ComputeArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let prices_path = self
            .prices
            .as_ref()
            .unwrap_or(&config.input.prices_path);
        let series = load_prices(prices_path)?;
        let years = self.years.as_deref().unwrap_or(&config.payout.years);

        tracing::info!(
            observations = series.len(),
            years = years.len(),
            "generating payout schedule"
        );
        let params = config.payout_params();
        let (records, summaries) = schedule::compute(&series, &params, years);

        match self.format.as_str() {
            "json" => {
                let output = ComputeOutput {
                    records: &records,
                    summaries: &summaries,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            "table" => {
                print!("{}", report::format_records_table(&records));
                println!();
                print!("{}", report::format_summary_table(&summaries));
            }
            other => anyhow::bail!("unknown output format: {other}"),
        }
        Ok(())
    }
}
