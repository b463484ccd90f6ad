use std::{fs, path::Path, time::Duration};

use anyhow::{ensure, Context};
use libgame::{grid::Grid, pattern::Pattern};
use serde::Deserialize;

/// Largest grid side accepted; keeps cell pixel coordinates within `u32`.
pub const MAX_GRID_SIDE: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub title: String,
    pub grid_width: usize,
    pub grid_height: usize,
    pub window_width: usize,
    pub window_height: usize,
    pub tick_rate: f64, // Generations per second.
    pub target_fps: u64,
    pub seed_pattern: String,
    pub seed_origin: [usize; 2],
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: "life".to_owned(),
            grid_width: 80,
            grid_height: 80,
            window_width: 800,
            window_height: 600,
            tick_rate: 4.0,
            target_fps: 60,
            seed_pattern: "glider".to_owned(),
            seed_origin: [3, 4],
        }
    }
}

impl ClientConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let serialized =
            fs::read(path).with_context(|| format!("Reading config {}", path.display()))?;

        Self::from_json(&serialized).with_context(|| format!("Parsing config {}", path.display()))
    }

    pub fn from_json(serialized: &[u8]) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_slice(serialized)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width <= MAX_GRID_SIDE && self.grid_height <= MAX_GRID_SIDE,
            "grid must be at most {MAX_GRID_SIDE}x{MAX_GRID_SIDE}, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window must be at least 1x1, got {}x{}",
            self.window_width,
            self.window_height
        );
        self.tick_interval()?;
        ensure!(self.target_fps > 0, "target fps must be positive");

        self.pattern()?;
        Ok(())
    }

    /// Time between generations.
    pub fn tick_interval(&self) -> anyhow::Result<Duration> {
        ensure!(
            self.tick_rate.is_finite() && self.tick_rate > 0.0,
            "tick rate must be positive, got {}",
            self.tick_rate
        );

        Duration::try_from_secs_f64(1.0 / self.tick_rate)
            .with_context(|| format!("tick rate {} is too slow", self.tick_rate))
    }

    pub fn pattern(&self) -> anyhow::Result<Pattern> {
        Pattern::by_name(&self.seed_pattern)
            .with_context(|| format!("Unknown seed pattern {:?}", self.seed_pattern))
    }

    pub fn seed_grid(&self) -> anyhow::Result<Grid> {
        let mut grid = Grid::new(self.grid_width, self.grid_height);
        self.pattern()?.stamp(&mut grid, self.seed_origin);
        Ok(grid)
    }
}
