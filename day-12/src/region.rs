use glam::IVec2;
use tracing::{debug, instrument};

use crate::grid::{Direction, Grid};

/// Maximal 4-connected group of plots sharing one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: usize,
    symbol: char,
    cells: Vec<IVec2>,
}

impl Region {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn cells(&self) -> &[IVec2] {
        &self.cells
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }
}

/// Partition of a [`Grid`] into regions.
///
/// `labels` holds the owning region id of every cell, indexed like the grid,
/// and doubles as the visited marker while segmenting.
#[derive(Debug, Clone)]
pub struct RegionMap<'g> {
    grid: &'g Grid,
    labels: Vec<usize>,
    regions: Vec<Region>,
}

impl RegionMap<'_> {
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Coordinate membership test. Off-grid cells belong to no region.
    pub fn contains(&self, region: &Region, cell: IVec2) -> bool {
        self.grid
            .index(cell)
            .is_some_and(|idx| self.labels[idx] == region.id)
    }

    pub fn region_at(&self, cell: IVec2) -> Option<&Region> {
        self.grid
            .index(cell)
            .map(|idx| &self.regions[self.labels[idx]])
    }

    /// Whether the plot on the `direction` side of `cell` is part of `region`.
    /// When it is not, `cell` has a fence edge facing `direction`.
    pub fn neighbour_in_region(&self, region: &Region, cell: IVec2, direction: Direction) -> bool {
        self.contains(region, cell + direction.offset())
    }
}

const UNVISITED: usize = usize::MAX;

/// Flood-fills `grid` into maximal same-symbol regions.
///
/// Cells are scanned row-major and each unvisited cell seeds a new region, so
/// every cell is pushed and labelled exactly once.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn segment(grid: &Grid) -> RegionMap<'_> {
    let mut labels = vec![UNVISITED; grid.len()];
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    let plots = grid.plots();

    for (start_idx, (start, &symbol)) in grid.cells().zip(plots).enumerate() {
        if labels[start_idx] != UNVISITED {
            continue;
        }

        let id = regions.len();
        let mut cells = Vec::new();
        labels[start_idx] = id;
        stack.push(start);

        while let Some(current) = stack.pop() {
            cells.push(current);

            for direction in Direction::ALL {
                let next = current + direction.offset();
                let Some(idx) = grid.index(next) else {
                    continue;
                };
                if labels[idx] == UNVISITED && plots[idx] == symbol {
                    labels[idx] = id;
                    stack.push(next);
                }
            }
        }

        regions.push(Region { id, symbol, cells });
    }

    debug!("Segmented grid into {} regions", regions.len());

    RegionMap {
        grid,
        labels,
        regions,
    }
}
