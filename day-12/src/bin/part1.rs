use clap::Parser;
use day_12::{
    cli::{init_tracing, read_input, Args},
    part1::process,
};
use miette::Context;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init_tracing();

    let args = Args::parse();
    let file = read_input(args.input_or("input1.txt"))?;
    let result = process(&file).context("process part 1")?;
    println!("{}", result);
    Ok(())
}
