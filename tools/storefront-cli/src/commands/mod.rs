//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod categories;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Case-insensitive title search.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category to show ("all" for every category). Defaults to the config.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Sort order: default, price-asc, price-desc, name-asc, name-desc.
    /// Defaults to the config.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Cart actions to apply before listing (same syntax as `cart`).
    #[arg(long = "with-cart", value_name = "ACTION")]
    pub with_cart: Vec<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Actions to replay in order: add:<id>, inc:<id>, dec:<id>,
    /// set:<id>=<qty>, rm:<id>, clear.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
