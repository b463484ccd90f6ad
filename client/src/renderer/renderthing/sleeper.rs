use std::time::{Duration, Instant};

/// Paces a loop to a target period by sleeping off whatever is left of it.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    pub fn from_fps(target_fps: u64) -> Self {
        Self::new(Duration::from_micros(1_000_000 / target_fps.max(1)))
    }

    /// Sleeps until a full period has passed since the previous call. Returns whether it slept.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining(Instant::now()) {
            Some(remaining) => {
                spin_sleep::sleep(remaining);
                true
            }
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    /// Time left in the current period, or `None` if we're late (or have never slept yet).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let last_instant = self.last_instant?;
        let delta_time = now.saturating_duration_since(last_instant);

        self.target_delta_time
            .checked_sub(delta_time)
            .filter(|remaining| !remaining.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_until_first_sleep() {
        let mut sleeper = Sleeper::from_fps(1000);

        assert_eq!(sleeper.remaining(Instant::now()), None);
        assert!(!sleeper.sleep());
        assert!(sleeper.last_instant.is_some());
    }

    #[test]
    fn remaining_counts_down_from_last_instant() {
        let start = Instant::now();
        let sleeper = Sleeper {
            target_delta_time: Duration::from_millis(20),
            last_instant: Some(start),
        };

        assert_eq!(
            sleeper.remaining(start + Duration::from_millis(5)),
            Some(Duration::from_millis(15))
        );
        assert_eq!(sleeper.remaining(start + Duration::from_millis(20)), None);
        assert_eq!(sleeper.remaining(start + Duration::from_millis(50)), None);
    }

    #[test]
    fn second_sleep_waits_out_the_period() {
        let mut sleeper = Sleeper::new(Duration::from_millis(50));
        sleeper.sleep();

        let before = Instant::now();
        assert!(sleeper.sleep());
        assert!(before.elapsed() >= Duration::from_millis(30));
    }
}
