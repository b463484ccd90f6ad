use grid::Grid;

pub mod error;
pub mod grid;
pub mod pattern;
pub mod pos;
pub mod rule;
pub mod step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub grid: Grid,
    pub generation: u64,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    /// Replaces the grid with the next generation.
    pub fn tick(&mut self) {
        self.grid = step::step(&self.grid);
        self.generation += 1;

        log::debug!(
            "generation {} population {}",
            self.generation,
            self.grid.population()
        );
        log::trace!("\n{}", self.grid);
    }
}
