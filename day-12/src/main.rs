use clap::Parser;
use day_12::{
    cli::{init_tracing, read_input, Args},
    fence::survey,
    parser::parse_grid,
};
use miette::Context;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init_tracing();

    let args = Args::parse();
    let file = read_input(args.input_or("input1.txt"))?;
    let grid = parse_grid(&file).context("Failed to parse garden map")?;
    let report = survey(&grid);

    println!("fence price: {}", report.total_price);
    println!("bulk discount price: {}", report.total_bulk_price);
    Ok(())
}
