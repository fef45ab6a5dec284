use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    grid::Grid,
    perimeter::perimeter,
    region::{segment, Region, RegionMap},
    sides::sides,
};

/// Fence measurements of a single region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub id: usize,
    pub symbol: char,
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

impl Fence {
    pub fn measure(map: &RegionMap, region: &Region) -> Self {
        Self {
            id: region.id(),
            symbol: region.symbol(),
            area: region.area(),
            perimeter: perimeter(map, region),
            sides: sides(map, region),
        }
    }

    /// Price when every fence edge is paid for.
    pub fn price(&self) -> u64 {
        (self.area * self.perimeter) as u64
    }

    /// Price when each straight side is paid for once.
    pub fn bulk_price(&self) -> u64 {
        (self.area * self.sides) as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceReport {
    pub fences: Vec<Fence>,
    pub total_price: u64,
    pub total_bulk_price: u64,
}

/// Measures every region of `grid` and totals both prices.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn survey(grid: &Grid) -> FenceReport {
    info!("Segmenting {}x{} garden", grid.width(), grid.height());
    let map = segment(grid);

    let fences: Vec<Fence> = map
        .regions()
        .par_iter()
        .map(|region| Fence::measure(&map, region))
        .collect();

    for fence in &fences {
        debug!(
            symbol = %fence.symbol,
            area = fence.area,
            perimeter = fence.perimeter,
            sides = fence.sides,
            "region {}",
            fence.id
        );
    }

    let total_price: u64 = fences.iter().map(Fence::price).sum();
    let total_bulk_price: u64 = fences.iter().map(Fence::bulk_price).sum();

    info!(total_price, total_bulk_price, "Surveyed {} regions", fences.len());

    FenceReport {
        fences,
        total_price,
        total_bulk_price,
    }
}

/// Sum of `area * perimeter` over all regions, without counting sides.
#[instrument(skip_all)]
pub fn total_price(grid: &Grid) -> u64 {
    total_by(grid, perimeter)
}

/// Sum of `area * sides` over all regions, without counting perimeters.
#[instrument(skip_all)]
pub fn total_bulk_price(grid: &Grid) -> u64 {
    total_by(grid, sides)
}

fn total_by<F>(grid: &Grid, measure: F) -> u64
where
    F: Fn(&RegionMap, &Region) -> usize + Sync,
{
    let map = segment(grid);
    let total: u64 = map
        .regions()
        .par_iter()
        .map(|region| (region.area() * measure(&map, region)) as u64)
        .sum();

    info!(total, "Priced {} regions", map.len());
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_grid;
    use rstest::rstest;

    #[test_log::test]
    fn test_survey_example() -> miette::Result<()> {
        let grid = parse_grid("AAAA\nBBCD\nBBCC\nEEEC")?;
        let report = survey(&grid);

        assert_eq!(5, report.fences.len());
        assert_eq!(140, report.total_price);
        assert_eq!(80, report.total_bulk_price);

        let mut measured: Vec<_> = report
            .fences
            .iter()
            .map(|f| (f.symbol, f.area, f.perimeter, f.sides))
            .collect();
        measured.sort();
        assert_eq!(
            vec![
                ('A', 4, 10, 4),
                ('B', 4, 8, 4),
                ('C', 4, 10, 8),
                ('D', 1, 4, 4),
                ('E', 3, 8, 4),
            ],
            measured
        );
        Ok(())
    }

    #[test]
    fn test_fence_prices() {
        let fence = Fence {
            id: 0,
            symbol: 'C',
            area: 4,
            perimeter: 10,
            sides: 8,
        };
        assert_eq!(40, fence.price());
        assert_eq!(32, fence.bulk_price());
    }

    #[rstest]
    #[case::nested("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO", 772, 436)]
    #[case::e_shape("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE", 692, 236)]
    #[case::single("Q", 4, 4)]
    fn test_survey_totals(
        #[case] input: &str,
        #[case] price: u64,
        #[case] bulk_price: u64,
    ) -> miette::Result<()> {
        let report = survey(&parse_grid(input)?);
        assert_eq!(price, report.total_price);
        assert_eq!(bulk_price, report.total_bulk_price);
        Ok(())
    }

    #[rstest]
    #[case::small("AAAA\nBBCD\nBBCC\nEEEC")]
    #[case::nested("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO")]
    #[case::diagonal_holes("AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA")]
    fn test_single_metric_totals_match_survey(#[case] input: &str) -> miette::Result<()> {
        let grid = parse_grid(input)?;
        let report = survey(&grid);

        assert_eq!(report.total_price, total_price(&grid));
        assert_eq!(report.total_bulk_price, total_bulk_price(&grid));
        Ok(())
    }

    #[test]
    fn test_parallel_matches_sequential() -> miette::Result<()> {
        let grid = parse_grid(
            "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE",
        )?;
        let map = segment(&grid);
        let sequential: Vec<_> = map
            .regions()
            .iter()
            .map(|region| Fence::measure(&map, region))
            .collect();

        assert_eq!(sequential, survey(&grid).fences);
        Ok(())
    }
}
