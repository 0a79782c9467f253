use btc_ticker::cli::{Cli, Commands};
use btc_ticker::config::Config;
use btc_ticker::telemetry::LogTarget;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load_or_default(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });
    if let Some(ref path) = cli.log_file {
        config.telemetry.log_file = Some(path.clone());
    }

    let command = cli.selected_command();

    // The dashboard owns the terminal, so it only logs when given a file
    let fallback = match command {
        Commands::Run(_) => LogTarget::Disabled,
        Commands::Once(_) | Commands::Config => LogTarget::Stderr,
    };
    btc_ticker::telemetry::init_telemetry(&config.telemetry, fallback)?;

    match command {
        Commands::Run(args) => {
            args.execute(&config).await?;
        }
        Commands::Once(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Feed: {} ({})", config.feed.exchange, config.feed.endpoint);
            println!("  Poll interval: {:?} (fixed)", btc_ticker::feed::POLL_INTERVAL);
            println!(
                "  Display: prefix={:?} separator={:?}",
                config.display.currency_prefix, config.display.thousands_separator
            );
            println!(
                "  Logging: level={} file={}",
                config.telemetry.log_level,
                config
                    .telemetry
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
        }
    }

    Ok(())
}
