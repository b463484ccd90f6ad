use std::fmt;

use itertools::Itertools;

use crate::{error::GridError, pos::Position};

/// A fixed-size field of cells, stored row by row.
///
/// Every accessor comes in two flavours. `get`/`set` treat anything outside the grid as
/// permanently dead: reads return `false` and writes are dropped. `try_get`/`try_set` report
/// [`GridError::OutOfBounds`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.pos_to_index(pos)
            .map(|index| self.cells[index])
            .unwrap_or(false)
    }

    pub fn set<P>(&mut self, pos: P, alive: bool)
    where
        P: Into<Position>,
    {
        if let Some(index) = self.pos_to_index(pos) {
            self.cells[index] = alive;
        }
    }

    pub fn try_get<P>(&self, pos: P) -> Result<bool, GridError>
    where
        P: Into<Position>,
    {
        let index = self.checked_index(pos.into())?;
        Ok(self.cells[index])
    }

    pub fn try_set<P>(&mut self, pos: P, alive: bool) -> Result<(), GridError>
    where
        P: Into<Position>,
    {
        let index = self.checked_index(pos.into())?;
        self.cells[index] = alive;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, alive)| (self.index_to_pos(index), *alive))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.enumerate_cells()
            .filter_map(|(pos, alive)| alive.then_some(pos))
    }

    fn checked_index(&self, pos: Position) -> Result<usize, GridError> {
        self.pos_to_index(pos).ok_or(GridError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }

        let rows = self.cells.chunks(self.width).map(|row| {
            row.iter()
                .map(|alive| if *alive { '1' } else { '0' })
                .collect::<String>()
        });

        write!(f, "{}", rows.format("\n"))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a grid from rows of `0`/`1`, top row first.
    pub(crate) fn grid_from_rows(rows: &[&str]) -> Grid {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut grid = Grid::new(width, height);

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged row {y}");

            for (x, cell) in row.chars().enumerate() {
                grid.set((x, y), cell == '1');
            }
        }

        grid
    }

    #[test]
    fn new_grid_is_all_dead() {
        for (width, height) in [(1, 1), (3, 3), (7, 2), (80, 80)] {
            let grid = Grid::new(width, height);

            assert_eq!(grid.population(), 0);
            assert!(grid.enumerate_cells().all(|(_, alive)| !alive));
            assert_eq!(grid.enumerate_cells().count(), width * height);
        }
    }

    #[test]
    fn cells_are_stored_row_major() {
        let mut grid = Grid::new(4, 3);
        grid.set((3, 1), true);

        assert_eq!(grid.cells.iter().position(|alive| *alive), Some(4 + 3));
        assert!(grid.get([3, 1]));
        assert!(!grid.get([1, 3]));
    }

    #[test]
    fn lenient_accessors_treat_off_grid_as_dead() {
        let mut grid = Grid::new(3, 3);

        grid.set((3, 0), true);
        grid.set((0, 3), true);
        grid.set((usize::MAX, usize::MAX), true);

        assert_eq!(grid, Grid::new(3, 3));
        assert!(!grid.get((3, 0)));
        assert!(!grid.get((0, 100)));
    }

    #[test]
    fn strict_accessors_report_out_of_bounds() {
        let mut grid = Grid::new(3, 2);

        assert_eq!(
            grid.try_get((3, 0)),
            Err(GridError::OutOfBounds {
                pos: Position::new(3, 0),
                width: 3,
                height: 2,
            })
        );
        assert!(grid.try_set((0, 2), true).is_err());
        assert_eq!(grid.population(), 0);

        grid.try_set((2, 1), true).unwrap();
        assert_eq!(grid.try_get((2, 1)), Ok(true));
        assert_eq!(grid.try_get((0, 0)), Ok(false));
    }

    #[test]
    fn out_of_bounds_message_names_the_cell() {
        let error = Grid::new(80, 80).try_get((80, 5)).unwrap_err();

        assert_eq!(error.to_string(), "cell (80, 5) is outside the 80x80 grid");
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Grid::new(5, 5);
        original.set((1, 1), true);

        let mut copy = original.clone();
        copy.set((1, 1), false);
        copy.set((4, 4), true);

        assert!(original.get((1, 1)));
        assert!(!original.get((4, 4)));
        assert_eq!(original.population(), 1);
    }

    #[test]
    fn live_cells_lists_positions_in_row_order() {
        let grid = grid_from_rows(&["010", "001", "100"]);

        let live = grid.live_cells().collect_vec();

        assert_eq!(
            live,
            vec![
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(0, 2)
            ]
        );
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut grid = grid_from_rows(&["11", "11"]);
        grid.clear();

        assert_eq!(grid, Grid::new(2, 2));
    }

    #[test]
    fn display_prints_rows_top_to_bottom() {
        let grid = grid_from_rows(&["010", "011", "000"]);

        assert_eq!(grid.to_string(), "010\n011\n000");
    }
}
