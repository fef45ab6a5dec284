use std::fmt;

use glam::IVec2;
use itertools::Itertools;

use crate::error::GardenError;

/// One of the four edge orientations of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step towards the neighbour on this side. Rows grow downwards.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Right => IVec2::X,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
        }
    }

    /// Axis along which edges facing this way line up into one side.
    ///
    /// Top and bottom edges run horizontally, left and right edges run
    /// vertically, so this is always perpendicular to [`Direction::offset`].
    pub fn along(self) -> IVec2 {
        match self {
            Direction::Up | Direction::Down => IVec2::X,
            Direction::Left | Direction::Right => IVec2::Y,
        }
    }
}

/// Immutable rectangular map of plot symbols, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    plots: Vec<char>,
}

impl Grid {
    pub fn new(width: usize, plots: Vec<char>) -> Result<Self, GardenError> {
        if plots.is_empty() {
            return Err(GardenError::Empty);
        }
        if width == 0 || plots.len() % width != 0 {
            return Err(GardenError::Shape {
                width,
                len: plots.len(),
            });
        }

        Ok(Self {
            width,
            height: plots.len() / width,
            plots,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Flat `y * width + x` key of an in-bounds cell.
    pub fn index(&self, cell: IVec2) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.width + cell.x as usize)
    }

    /// Symbol at `cell`, or `None` off the map. `None` never matches a plot,
    /// so the map border always counts as a boundary.
    pub fn at(&self, cell: IVec2) -> Option<char> {
        self.index(cell).map(|idx| self.plots[idx])
    }

    /// Symbols in row-major order, indexed like [`Grid::index`].
    pub fn plots(&self) -> &[char] {
        &self.plots
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = IVec2> {
        (0..self.height as i32)
            .cartesian_product(0..self.width as i32)
            .map(|(y, x)| IVec2::new(x, y))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.plots.chunks(self.width) {
            for plot in row {
                write!(f, "{}", plot)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Grid {
        Grid::new(3, "ABCDEF".chars().collect()).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let grid = sample();
        assert_eq!(3, grid.width());
        assert_eq!(2, grid.height());
        assert_eq!(6, grid.len());
    }

    #[rstest]
    #[case::origin(IVec2::new(0, 0), Some('A'))]
    #[case::last(IVec2::new(2, 1), Some('F'))]
    #[case::second_row(IVec2::new(0, 1), Some('D'))]
    #[case::left_of_map(IVec2::new(-1, 0), None)]
    #[case::above_map(IVec2::new(0, -1), None)]
    #[case::right_of_map(IVec2::new(3, 0), None)]
    #[case::below_map(IVec2::new(0, 2), None)]
    fn test_at(#[case] cell: IVec2, #[case] expected: Option<char>) {
        let grid = sample();
        assert_eq!(expected, grid.at(cell));
        assert_eq!(expected.is_some(), grid.in_bounds(cell));
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<_> = sample().cells().collect();
        assert_eq!(
            vec![
                IVec2::new(0, 0),
                IVec2::new(1, 0),
                IVec2::new(2, 0),
                IVec2::new(0, 1),
                IVec2::new(1, 1),
                IVec2::new(2, 1),
            ],
            cells
        );
    }

    #[test]
    fn test_index_matches_cells() {
        let grid = sample();
        for (expected, cell) in grid.cells().enumerate() {
            assert_eq!(Some(expected), grid.index(cell));
        }
    }

    #[test]
    fn test_plots_follow_cells() {
        let grid = sample();
        for (cell, &plot) in grid.cells().zip(grid.plots()) {
            assert_eq!(Some(plot), grid.at(cell));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("ABC\nDEF\n", sample().to_string());
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        assert!(matches!(Grid::new(3, vec![]), Err(GardenError::Empty)));
        assert!(matches!(
            Grid::new(4, "ABCDEF".chars().collect()),
            Err(GardenError::Shape { width: 4, len: 6 })
        ));
        assert!(matches!(
            Grid::new(0, vec!['A']),
            Err(GardenError::Shape { width: 0, len: 1 })
        ));
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Right)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    fn test_along_is_perpendicular(#[case] direction: Direction) {
        assert_eq!(0, direction.offset().dot(direction.along()));
    }
}
