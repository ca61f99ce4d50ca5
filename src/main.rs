//! Exchange Listing - catalog card listing service
//!
//! Loads the card data file once and serves listing pages over HTTP.

use clap::Parser;
use exchange_listing::web::{self, ServerConfig, DEFAULT_BASE_PATH};
use exchange_listing::CardStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Exchange listing server - filtered, sorted, paginated catalog cards
#[derive(Parser, Debug)]
#[command(name = "exchange_listing")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the card data file (JSON object with a "cards" array)
    #[arg(short, long, default_value = "cards/exchange_cards.json")]
    data: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Path prefix the listing routes are served under
    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    base_path: String,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting exchange_listing...");
    log::info!("Data file: {}", args.data.display());

    // Load the card data once; it is never modified afterwards
    let store = match CardStore::load(&args.data) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Failed to load cards: {}", e);
            std::process::exit(1);
        }
    };

    if store.is_empty() {
        log::warn!("Card data file contains no cards");
    }

    // Start the web server
    let config = ServerConfig {
        bind: args.bind,
        port: args.port,
        base_path: args.base_path,
    };

    if let Err(e) = web::serve(store, &config).await {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
