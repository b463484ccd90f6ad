use std::time::{Duration, Instant};

use libgame::Game;

/// Advances a [`Game`] at a fixed rate, driven by wall-clock time handed in from the render loop.
pub struct Ticker {
    game: Game,
    interval: Duration,
    accumulated: Duration,
    last_instant: Option<Instant>,
}

impl Ticker {
    pub fn new(game: Game, interval: Duration) -> Self {
        Self {
            game,
            interval,
            accumulated: Duration::ZERO,
            last_instant: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Feeds the time passed since the previous call. The first call only starts the clock.
    pub fn update(&mut self, now: Instant) -> bool {
        let delta = match self.last_instant.replace(now) {
            Some(last_instant) => now.saturating_duration_since(last_instant),
            None => Duration::ZERO,
        };

        self.advance(delta)
    }

    /// Ticks the game at most once when enough time has accumulated. Leftover time is dropped.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.accumulated += delta;

        if self.accumulated < self.interval {
            return false;
        }

        self.accumulated = Duration::ZERO;
        self.game.tick();
        true
    }
}
