//! PayeTonKawa CLI - Catalog browsing tools.
//!
//! # Usage
//!
//! ```bash
//! # List every coffee, or only the featured ones
//! kawa list
//! kawa list --featured
//!
//! # Search with the storefront's filters
//! kawa search chocolat
//! kawa search --origin Kenya --roast light --price 25-30
//!
//! # Show one product, as JSON
//! kawa --json show 2
//!
//! # Use a catalog file instead of the built-in coffees
//! kawa --catalog catalog.json origins
//! ```
//!
//! # Commands
//!
//! - `list` - List products in catalog order
//! - `search` - Filter products by text, origin, roast level and price bracket
//! - `show` - Show one product
//! - `origins` - List distinct origins

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use payetonkawa_core::{PriceBracket, RoastLevel};

mod commands;

use commands::catalog::{Output, SearchArgs};

#[derive(Parser)]
#[command(name = "kawa")]
#[command(author, version, about = "PayeTonKawa catalog tools")]
struct Cli {
    /// JSON catalog file (defaults to `STOREFRONT_CATALOG_PATH`, then the built-in coffees)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in catalog order
    List {
        /// Only featured products
        #[arg(long)]
        featured: bool,
    },
    /// Search products
    Search {
        /// Text matched against name, description and tasting notes
        query: Option<String>,

        /// Exact origin, e.g. "Éthiopie"
        #[arg(long)]
        origin: Option<String>,

        /// Roast level (`light`, `medium`, `dark`)
        #[arg(long)]
        roast: Option<RoastLevel>,

        /// Price bracket, e.g. `0-25`, `25-30` or `30-`
        #[arg(long)]
        price: Option<PriceBracket>,
    },
    /// Show one product
    Show {
        /// Product id
        id: String,
    },
    /// List distinct origins
    Origins,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kawa=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let catalog_path = cli.catalog.or_else(|| {
        std::env::var("STOREFRONT_CATALOG_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    });
    let catalog = commands::catalog::load(catalog_path.as_deref())?;
    let output = if cli.json { Output::Json } else { Output::Table };
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::List { featured } => {
            commands::catalog::list(&catalog, featured, output, &mut stdout)?;
        }
        Commands::Search {
            query,
            origin,
            roast,
            price,
        } => {
            let args = SearchArgs {
                query,
                origin,
                roast,
                price,
            };
            commands::catalog::search(&catalog, &args, output, &mut stdout)?;
        }
        Commands::Show { id } => commands::catalog::show(&catalog, &id, output, &mut stdout)?,
        Commands::Origins => commands::catalog::origins(&catalog, output, &mut stdout)?,
    }
    Ok(())
}
