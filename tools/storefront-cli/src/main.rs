//! Storefront CLI - browse a product catalog and replay cart sessions.
//!
//! Commands:
//! - `storefront browse` - List products through the search/category/sort view
//! - `storefront categories` - List the distinct catalog categories
//! - `storefront cart` - Replay cart actions and print the totals
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CartArgs, ConfigArgs};

/// Storefront CLI - browse the catalog and try out a cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog JSON file (overrides the config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with search, category and sort applied
    Browse(BrowseArgs),

    /// List catalog categories
    Categories,

    /// Replay cart actions against the catalog
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let mut ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    if let Some(catalog) = cli.catalog {
        ctx.config.catalog.path = catalog;
    }

    if !logging::init(&ctx.config.logging, cli.verbose) {
        ctx.output.debug("Log subscriber already installed, keeping it");
    }

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
