use crate::{grid::Grid, pos::Position, rule};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Computes the next generation.
///
/// Every cell is judged against `grid` as it was passed in; the result is written to a fresh grid
/// of the same size, so `grid` is never observed half-updated.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height());

    for (pos, alive) in grid.enumerate_cells() {
        if rule::next_state(alive, live_neighbors(grid, pos)) {
            next.set(pos, true);
        }
    }

    next
}

/// Counts live cells among the eight around `pos`. Anything past the grid edge counts as dead.
pub fn live_neighbors(grid: &Grid, pos: Position) -> usize {
    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .filter_map(|[dx, dy]| pos.offset(*dx, *dy))
        .filter(|neighbor| grid.get(*neighbor))
        .count()
}
