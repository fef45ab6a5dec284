use crate::{
    grid::Direction,
    region::{Region, RegionMap},
};

/// Number of fence edges around `region`: one per plot side that faces the
/// map border or a plot of another region.
pub fn perimeter(map: &RegionMap, region: &Region) -> usize {
    region
        .cells()
        .iter()
        .map(|&cell| {
            Direction::ALL
                .into_iter()
                .filter(|&direction| !map.neighbour_in_region(region, cell, direction))
                .count()
        })
        .sum()
}

/// Unordered pairs of 4-adjacent plots inside `region`.
pub fn internal_adjacent_pairs(map: &RegionMap, region: &Region) -> usize {
    // Right and Down only, so each pair is seen once.
    region
        .cells()
        .iter()
        .map(|&cell| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter(|&direction| map.neighbour_in_region(region, cell, direction))
                .count()
        })
        .sum()
}

/// `4 * area - 2 * internal pairs`; must agree with [`perimeter`].
pub fn perimeter_from_pairs(map: &RegionMap, region: &Region) -> usize {
    4 * region.area() - 2 * internal_adjacent_pairs(map, region)
}
