use std::env;

use config::ClientConfig;
use libgame::Game;

mod config;
mod renderer;
mod ticker;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(config_path) => ClientConfig::load(config_path)?,
        None => ClientConfig::default(),
    };

    log::info!(
        "{}x{} grid, seeded with {} at {:?}, {} generations/s",
        config.grid_width,
        config.grid_height,
        config.seed_pattern,
        config.seed_origin,
        config.tick_rate
    );

    let game = Game::new(config.seed_grid()?);
    renderer::run(&config, game)
}
