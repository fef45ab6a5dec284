pub mod cli;
pub mod error;
pub mod fence;
pub mod grid;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod perimeter;
pub mod region;
pub mod sides;
