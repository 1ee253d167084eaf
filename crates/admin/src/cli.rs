use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use catalog_client::ClientConfig;
use catalog_client::config::DEFAULT_API_URL;

/// Command-line administration for the retail catalog.
#[derive(Debug, Parser)]
#[command(name = "catalog-admin", version)]
pub struct Cli {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Base URL of the Catalog Service.
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Bearer token sent with every request.
    #[arg(long, env = "CATALOG_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "CATALOG_API_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

impl ApiArgs {
    pub fn to_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.api_url)
            .with_timeout(std::time::Duration::from_secs(self.timeout_secs));
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            config = config.with_token(token);
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage product types.
    Types {
        #[command(subcommand)]
        action: TaxonomyAction,
    },
    /// Manage brands.
    Brands {
        #[command(subcommand)]
        action: TaxonomyAction,
    },
    /// Edit product variants.
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum TaxonomyAction {
    List {
        /// Keyword passed to the service.
        #[arg(long, default_value = "")]
        keyword: String,
        /// Case-insensitive filter applied to the returned names.
        #[arg(long)]
        search: Option<String>,
    },
    Create {
        name: String,
    },
    Update {
        id: i32,
        name: String,
    },
    Delete {
        id: i32,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProductAction {
    /// Print a fresh edit draft for a product.
    Init {
        #[arg(long)]
        id: String,
        /// JSON array of the product's stored variant records.
        #[arg(long)]
        records: Option<PathBuf>,
    },
    /// Validate a draft and send it to the service.
    Edit {
        #[arg(long)]
        draft: PathBuf,
        /// Validate and print the payload without sending it.
        #[arg(long)]
        dry_run: bool,
    },
}
