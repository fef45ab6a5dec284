use miette::{Context, Result};

use crate::{fence::total_bulk_price, parser::parse_grid};

/// Total fence price when each straight side is paid for once.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_grid(input).context("Failed to parse garden map")?;
    Ok(total_bulk_price(&grid).to_string())
}
