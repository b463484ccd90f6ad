use crate::{grid::Grid, pos::Position};

/// A named set of live cells, given as `[x, y]` offsets from the pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [[usize; 2]],
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[[1, 0], [2, 1], [2, 2], [1, 2], [0, 2]],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[[1, 0], [1, 1], [1, 2]],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[[0, 0], [1, 0], [0, 1], [1, 1]],
};

pub const BUILTIN: &[Pattern] = &[GLIDER, BLINKER, BLOCK];

impl Pattern {
    pub fn by_name(name: &str) -> Option<Pattern> {
        BUILTIN
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|[x, _]| x + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|[_, y]| y + 1).max().unwrap_or(0)
    }

    /// Sets the pattern's cells alive with its top-left corner at `origin`. Cells that land
    /// outside the grid are dropped.
    pub fn stamp<P>(&self, grid: &mut Grid, origin: P)
    where
        P: Into<Position>,
    {
        let origin = origin.into();

        for [dx, dy] in self.cells {
            let (Some(x), Some(y)) = (origin.x.checked_add(*dx), origin.y.checked_add(*dy)) else {
                continue;
            };

            grid.set((x, y), true);
        }
    }
}
