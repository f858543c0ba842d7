// In app/src/main.rs

use std::path::PathBuf;

use analytics::AnalyticsEngine;
use anyhow::Result;
use app_config::Settings;
use clap::{Parser, Subcommand};
use core_types::{Side, Trade};
use rust_decimal::Decimal;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;
use web_server::types::AnalyzeTradeResponse;

mod report;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Reviews single trades against risk discipline rules.")]
struct Cli {
    /// Directory holding `base.toml` and the environment overrides.
    #[arg(long, global = true, default_value = app_config::DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the HTTP API serving `POST /analyze-trade`.
    Serve,

    /// Reviews a single trade from the command line.
    Analyze {
        /// Account capital the trade was taken with.
        #[arg(long)]
        capital: Decimal,

        #[arg(long)]
        entry_price: Decimal,

        #[arg(long)]
        exit_price: Decimal,

        /// Stop-loss price, 0 if none was placed.
        #[arg(long)]
        stop_loss: Decimal,

        #[arg(long)]
        quantity: u64,

        /// Either "long" or "short".
        #[arg(long)]
        direction: Side,

        /// Optional TOML file overriding the configured rule thresholds.
        #[arg(long)]
        rules_file: Option<PathBuf>,

        /// Print the API response body instead of the text report.
        #[arg(long)]
        json: bool,
    },
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings_from(&cli.config_dir)?;
    init_tracing(&settings);

    tracing::info!(environment = %settings.app.environment, "Starting Trade Autopsy");

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::Serve => {
            web_server::run(settings.server, settings.rules).await?;
        }
        Commands::Analyze {
            capital,
            entry_price,
            exit_price,
            stop_loss,
            quantity,
            direction,
            rules_file,
            json,
        } => {
            let trade = Trade {
                capital,
                entry_price,
                exit_price,
                stop_loss,
                quantity,
                direction,
            };
            handle_analyze(&settings, trade, rules_file, json)?;
        }
    }

    tracing::info!("Trade Autopsy has finished successfully.");

    Ok(())
}

/// Installs the fmt subscriber, filtered by the configured log level.
fn init_tracing(settings: &Settings) {
    let (targets, invalid_filter) = match settings.app.log_level.parse::<Targets>() {
        Ok(targets) => (targets, false),
        Err(_) => (Targets::new().with_default(tracing::Level::INFO), true),
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(targets);
    tracing_subscriber::registry().with(fmt_layer).init();

    if invalid_filter {
        tracing::warn!(
            log_level = %settings.app.log_level,
            "Invalid log level in settings, falling back to INFO."
        );
    }
}

// --- "Analyze" Subcommand Logic ---

/// Reviews one trade offline and prints the result.
fn handle_analyze(
    settings: &Settings,
    trade: Trade,
    rules_file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let rules = match rules_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading rule thresholds from file.");
            app_config::load_rules_file(&path)?
        }
        None => settings.rules,
    };

    let engine = AnalyticsEngine::new();
    let response = AnalyzeTradeResponse::review(&engine, &trade, &rules);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let discipline = risk::assess_discipline(&trade, &response.analysis, &rules);
        print!("{}", report::render_report(&response, &discipline));
    }

    Ok(())
}
