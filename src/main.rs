mod api;
mod config;
mod console;
mod dashboard;
mod debounce;
mod error;
mod filter;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use api::HetznerClient;
use clap::Parser;
use config::{Config, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
use dashboard::Dashboard;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(name = "zonedash")]
#[command(about = "Browse and edit Hetzner DNS zone records", long_about = None)]
struct Args {
    #[arg(short, long, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = Config::load(&args.config)?;
    let client = HetznerClient::new(
        &config.api_token,
        &config.base_url,
        config.request_timeout(),
    )?;

    let mut dashboard = Dashboard::new(client, config.search_debounce());
    console::run(
        &mut dashboard,
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
    )
    .await
}
