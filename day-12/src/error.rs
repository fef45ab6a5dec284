use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GardenError {
    #[error("Garden map is empty")]
    #[diagnostic(code(garden::empty), help("Provide at least one row of plots"))]
    Empty,

    #[error("Row {row} has {found} plots, expected {expected}")]
    #[diagnostic(
        code(garden::ragged),
        help("Every row of the garden map must have the same length")
    )]
    Ragged {
        #[source_code]
        src: String,
        #[label("this row")]
        span: SourceSpan,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unexpected character {found:?} in garden map")]
    #[diagnostic(
        code(garden::unexpected_character),
        help("Plots are single non-whitespace characters, one row per line")
    )]
    UnexpectedCharacter {
        #[source_code]
        src: String,
        #[label("could not parse a plot here")]
        span: SourceSpan,
        found: char,
    },

    #[error("Cannot shape {len} plots into rows of width {width}")]
    #[diagnostic(code(garden::shape))]
    Shape { width: usize, len: usize },
}
