mod renderthing;

use std::time::Instant;

use libgame::{grid::Grid, Game};
use renderthing::{
    frame::{Color, RenderFrame},
    window::RendererWindowConfig,
    Renderer,
};

use crate::{config::ClientConfig, ticker::Ticker};

const BACKGROUND: Color = [0, 0, 0, 255];
const LIVE_CELL: Color = [255; 4];

/// Opens the window and runs the simulation until it's closed.
pub fn run(config: &ClientConfig, game: Game) -> anyhow::Result<()> {
    let mut ticker = Ticker::new(game, config.tick_interval()?);

    let renderer = Renderer::new(RendererWindowConfig {
        title: config.title.clone(),
        width: config.window_width,
        height: config.window_height,
        target_fps: config.target_fps,
        draw_callback: Box::new(move |frame: RenderFrame| {
            ticker.update(Instant::now());
            draw(&ticker.game().grid, frame);
        }),
    })?;

    renderer.run()
}

fn draw(grid: &Grid, mut frame: RenderFrame) {
    let cell_size = CellSize::fit(frame.width, frame.height, grid);

    frame.fill(BACKGROUND);

    for rect in live_cell_rects(grid, cell_size) {
        frame.draw_rect(rect.x, rect.y, rect.width, rect.height, LIVE_CELL);
    }
}

/// Pixel size of one cell on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    /// The largest whole-pixel cell that fits `grid` into the frame, never smaller than one pixel.
    pub fn fit(frame_width: u32, frame_height: u32, grid: &Grid) -> Self {
        Self {
            width: (frame_width / saturating_u32(grid.width()).max(1)).max(1),
            height: (frame_height / saturating_u32(grid.height()).max(1)).max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One filled rectangle per live cell, columns scaled along x and rows along y.
pub fn live_cell_rects(grid: &Grid, cell_size: CellSize) -> impl Iterator<Item = CellRect> + '_ {
    grid.live_cells().map(move |pos| CellRect {
        x: saturating_u32(pos.x).saturating_mul(cell_size.width),
        y: saturating_u32(pos.y).saturating_mul(cell_size.height),
        width: cell_size.width,
        height: cell_size.height,
    })
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
