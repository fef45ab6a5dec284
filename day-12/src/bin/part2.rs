use clap::Parser;
use day_12::{
    cli::{init_tracing, read_input, Args},
    part2::process,
};
use miette::Context;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init_tracing();

    let args = Args::parse();
    let file = read_input(args.input_or("input2.txt"))?;
    let result = process(&file).context("process part 2")?;
    println!("{}", result);
    Ok(())
}
