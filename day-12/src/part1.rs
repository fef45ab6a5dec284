use miette::{Context, Result};

use crate::{fence::total_price, parser::parse_grid};

/// Total fence price when every exposed plot edge is paid for.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_grid(input).context("Failed to parse garden map")?;
    Ok(total_price(&grid).to_string())
}
