use clap::Parser;
use payband::cli::{Cli, Commands};
use payband::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = payband::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Compute(args) => {
            tracing::info!("Computing payout schedule");
            args.execute(&config)?;
        }
        Commands::Summary(args) => {
            tracing::info!("Computing year summaries");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Payout: ${} monthly, years {:?}",
                config.payout.monthly_usd_target, config.payout.years
            );
            println!("  Band: {:?}", config.band);
            println!(
                "  Baseline: {} day window, {} sample minimum",
                config.baseline.window_days, config.baseline.min_samples
            );
            println!("  Prices: {}", config.input.prices_path.display());
        }
    }

    Ok(())
}
