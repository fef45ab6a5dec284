use nom::{
    character::complete::{line_ending, satisfy},
    combinator::consumed,
    multi::{many0, many1, separated_list1},
    sequence::terminated,
    IResult,
};
use nom_locate::LocatedSpan;
use tracing::debug;

use crate::{error::GardenError, grid::Grid};

type Span<'a> = LocatedSpan<&'a str>;

/// A parsed row together with the slice of source it came from.
type LocatedRow<'a> = (Span<'a>, Vec<char>);

fn parse_plot(input: Span) -> IResult<Span, char> {
    satisfy(|c: char| !c.is_whitespace())(input)
}

fn parse_rows(input: Span) -> IResult<Span, Vec<LocatedRow>> {
    terminated(
        separated_list1(line_ending, consumed(many1(parse_plot))),
        many0(line_ending),
    )(input)
}

fn unexpected(src: &str, at: Span) -> GardenError {
    match at.fragment().chars().next() {
        Some(found) => GardenError::UnexpectedCharacter {
            src: src.to_string(),
            span: (at.location_offset(), found.len_utf8()).into(),
            found,
        },
        None => GardenError::Empty,
    }
}

/// Parses a garden map: one row of single-character plots per line.
pub fn parse_grid(input: &str) -> Result<Grid, GardenError> {
    if input.trim().is_empty() {
        return Err(GardenError::Empty);
    }

    let (rest, rows) = match parse_rows(LocatedSpan::new(input)) {
        Ok(parsed) => parsed,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(unexpected(input, e.input));
        }
        Err(nom::Err::Incomplete(_)) => return Err(GardenError::Empty),
    };

    if !rest.fragment().is_empty() {
        return Err(unexpected(input, rest));
    }

    let width = rows.first().map_or(0, |(_, plots)| plots.len());
    if let Some((row, (span, plots))) = rows
        .iter()
        .enumerate()
        .find(|(_, (_, plots))| plots.len() != width)
    {
        return Err(GardenError::Ragged {
            src: input.to_string(),
            span: (span.location_offset(), span.fragment().len()).into(),
            row: row + 1,
            expected: width,
            found: plots.len(),
        });
    }

    debug!("Parsed {} rows of width {}", rows.len(), width);

    let plots = rows.into_iter().flat_map(|(_, plots)| plots).collect();
    Grid::new(width, plots)
}
