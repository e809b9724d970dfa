//! Catalog browsing commands.
//!
//! Every command renders either an aligned text table or pretty JSON into the
//! writer it is given, so tests can capture the output in a buffer.

use std::io::Write;
use std::path::{Path, PathBuf};

use payetonkawa_core::{Catalog, CatalogError, PriceBracket, Product, ProductFilter, RoastLevel};
use tracing::{debug, info};

/// Output format selected with `--json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
}

/// Errors raised by catalog commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog {}: {source}", .path.display())]
    Catalog {
        path: PathBuf,
        source: CatalogError,
    },

    #[error("no product with id `{0}`")]
    UnknownProduct(String),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Criteria for `kawa search`.
#[derive(Debug, Default)]
pub struct SearchArgs {
    pub query: Option<String>,
    pub origin: Option<String>,
    pub roast: Option<RoastLevel>,
    pub price: Option<PriceBracket>,
}

impl SearchArgs {
    fn to_filter(&self) -> ProductFilter {
        ProductFilter::new()
            .search(self.query.as_deref().unwrap_or_default())
            .origin(self.origin.as_deref().unwrap_or_default().trim())
            .roast(self.roast)
            .price(self.price)
    }
}

/// Load the catalog from `path`, or the built-in coffees.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid catalog.
pub fn load(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        debug!("Using built-in catalog");
        return Ok(Catalog::sample());
    };

    info!(path = %path.display(), "Loading catalog file");
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Catalog::from_json(&json).map_err(|source| CliError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

/// List products in catalog order.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn list(
    catalog: &Catalog,
    featured_only: bool,
    output: Output,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let products: Vec<&Product> = if featured_only {
        catalog.featured().collect()
    } else {
        catalog.products().iter().collect()
    };
    write_products(&products, output, out)
}

/// List products matching every given criterion.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn search(
    catalog: &Catalog,
    args: &SearchArgs,
    output: Output,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let products = catalog.filter(&args.to_filter());
    debug!(matches = products.len(), "Search complete");
    write_products(&products, output, out)
}

/// Show one product with all its details.
///
/// # Errors
///
/// Returns [`CliError::UnknownProduct`] if no product has this id.
pub fn show(
    catalog: &Catalog,
    id: &str,
    output: Output,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let product = catalog
        .find(id)
        .ok_or_else(|| CliError::UnknownProduct(id.to_owned()))?;

    match output {
        Output::Json => write_json(product, out),
        Output::Table => {
            writeln!(out, "{} ({})", product.name, product.id)?;
            writeln!(out, "  {}", product.description)?;
            writeln!(out, "  Origine:    {}", product.origin)?;
            writeln!(out, "  Torréfaction: {}", product.roast_level.label())?;
            writeln!(out, "  Prix:       {}", product.price)?;
            writeln!(out, "  Stock:      {}", product.stock)?;
            writeln!(out, "  Notes:      {}", product.tasting_notes.join(", "))?;
            if product.featured {
                writeln!(out, "  Produit vedette")?;
            }
            Ok(())
        }
    }
}

/// List distinct origins, sorted.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn origins(catalog: &Catalog, output: Output, out: &mut impl Write) -> Result<(), CliError> {
    let origins = catalog.origins();
    match output {
        Output::Json => write_json(&origins, out),
        Output::Table => {
            for origin in origins {
                writeln!(out, "{origin}")?;
            }
            Ok(())
        }
    }
}

fn write_products(
    products: &[&Product],
    output: Output,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if output == Output::Json {
        return write_json(&products, out);
    }

    if products.is_empty() {
        writeln!(out, "Aucun produit trouvé")?;
        return Ok(());
    }

    let name_width = products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or_default();
    let origin_width = products
        .iter()
        .map(|p| p.origin.chars().count())
        .max()
        .unwrap_or_default();

    for product in products {
        writeln!(
            out,
            "{:<4} {:<name_width$}  {:<origin_width$}  {:<7}  {:>8}  {:>3}",
            product.id.as_str(),
            product.name,
            product.origin,
            product.roast_level.label(),
            product.price.to_string(),
            product.stock,
        )?;
    }
    Ok(())
}

fn write_json(value: &impl serde::Serialize, out: &mut impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
