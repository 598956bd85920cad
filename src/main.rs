//! LazyShop - Terminal storefront
//!
//! This application provides an interactive storefront in the terminal:
//! browse a product catalog, keep a cart that persists across runs, and
//! watch the deal countdown tick down.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use lazyshop::cart::CartManager;
use lazyshop::catalog::Catalog;
use lazyshop::config::Config;
use lazyshop::constants::{APP_BINARY_NAME, APP_NAME};
use lazyshop::countdown::CountdownTimer;
use lazyshop::storage::FileStore;
use lazyshop::tui;

/// LazyShop - Terminal storefront
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a product catalog JSON file
    #[arg(value_name = "FILE")]
    catalog_path: Option<PathBuf>,

    /// Override the data directory for the persisted cart
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Deal deadline offset in days from now
    #[arg(long, value_name = "DAYS")]
    deal_days: Option<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e:#}");
        eprintln!("Continuing with default configuration.");
        Config::new()
    });

    // CLI arguments take precedence over the config file
    let catalog_path = cli.catalog_path.or_else(|| config.paths.catalog.clone());
    let catalog = match &catalog_path {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Catalog file not found: {}", path.display());
                eprintln!();
                eprintln!("Please provide a valid path to a JSON catalog file.");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {APP_BINARY_NAME} my_catalog.json");
                eprintln!();
                eprintln!("Run without arguments to browse the built-in sample catalog.");
                std::process::exit(1);
            }
            Catalog::load(path)?
        }
        None => Catalog::sample(),
    };

    if catalog.is_empty() {
        eprintln!("Error: Catalog contains no products.");
        std::process::exit(1);
    }

    let data_dir = match cli.data_dir.or_else(|| config.paths.data_dir.clone()) {
        Some(dir) => dir,
        None => FileStore::default_data_dir()?,
    };
    let store = FileStore::new(data_dir);
    let cart = CartManager::new(Box::new(store))?;

    let deal_days = cli.deal_days.unwrap_or(config.deal.days);
    let countdown = CountdownTimer::new(deal_days);

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(catalog, cart, countdown, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
