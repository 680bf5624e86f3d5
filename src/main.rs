// Command-line entry point: runs one business search and prints the
// response as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use business_finder::business_search::{DEFAULT_MAX_RESULTS, DEFAULT_RADIUS_KM};
use business_finder::{SearchCriteria, handle_search, load_yaml_config, search_service};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "business-finder", version, about = "Find local businesses on a maps provider")]
struct Args {
    /// Business type, e.g. "bakery"
    #[arg(long)]
    industry: String,

    /// Where to search, e.g. "Ottawa, ON"
    #[arg(long)]
    location: String,

    /// Search radius in kilometres
    #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
    radius: u32,

    /// Maximum number of businesses to return (1-100)
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// YAML configuration file; defaults apply when it does not exist
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Show the browser window
    #[arg(long)]
    headed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = load_yaml_config(&args.config)
        .with_context(|| format!("Failed to read configuration from {}", args.config.display()))?;
    if args.headed {
        config.browser.headless = false;
    }

    let criteria = SearchCriteria::new(args.industry, args.location)
        .with_radius_km(args.radius)
        .with_max_results(args.max_results);

    let service = search_service(&config);
    let response = handle_search(service.as_ref(), criteria).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("Failed to serialize response")?
    );
    Ok(())
}
