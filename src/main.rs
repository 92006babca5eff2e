use anyhow::{Context, Result};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_ingest::ai::GeminiClient;
use trade_ingest::cascade::TradeParser;
use trade_ingest::config::Config;

/// Pasted text comes from the file named on the command line, or stdin.
fn read_input() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let input = read_input()?;
    if input.trim().is_empty() {
        anyhow::bail!("No input text");
    }

    let extractor = Arc::new(GeminiClient::new(&cfg));
    let parser = TradeParser::from_config(&cfg, extractor);

    let record = tokio::time::timeout(
        Duration::from_secs(cfg.ai_timeout_secs),
        parser.parse(&input),
    )
    .await
    .context("Extraction timed out")??;

    info!(symbol = %record.symbol, open = record.open_price, "Parsed trade");
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
