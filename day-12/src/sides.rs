use std::collections::HashMap;

use glam::IVec2;
use petgraph::unionfind::UnionFind;

use crate::{
    grid::Direction,
    region::{Region, RegionMap},
};

/// Region cells that have a fence edge facing `direction`.
pub fn boundary_cells(map: &RegionMap, region: &Region, direction: Direction) -> Vec<IVec2> {
    region
        .cells()
        .iter()
        .copied()
        .filter(|&cell| !map.neighbour_in_region(region, cell, direction))
        .collect()
}

/// Number of straight sides of `region` across all four orientations.
pub fn sides(map: &RegionMap, region: &Region) -> usize {
    Direction::ALL
        .into_iter()
        .map(|direction| sides_facing(map, region, direction))
        .sum()
}

/// Number of straight sides of `region` whose edges face `direction`.
///
/// Boundary cells are merged with their neighbour along
/// [`Direction::along`] when that neighbour has an edge facing the same way;
/// every remaining set is one side.
pub fn sides_facing(map: &RegionMap, region: &Region, direction: Direction) -> usize {
    let boundary = boundary_cells(map, region, direction);
    if boundary.is_empty() {
        return 0;
    }

    let local: HashMap<IVec2, usize> = boundary
        .iter()
        .enumerate()
        .map(|(idx, &cell)| (cell, idx))
        .collect();

    let mut sets = UnionFind::<usize>::new(boundary.len());
    let mut merges = 0;

    for (idx, &cell) in boundary.iter().enumerate() {
        if let Some(&next) = local.get(&(cell + direction.along())) {
            if sets.union(idx, next) {
                merges += 1;
            }
        }
    }

    boundary.len() - merges
}
