//! Fixed tick rate for the frame loop

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's time budget
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        FrameClock {
            frame: frame_budget(fps),
            last_tick: Instant::now(),
        }
    }

    /// Waits until the current frame is over and returns the full frame time
    pub fn tick(&mut self) -> Duration {
        if let Some(rest) = remaining(self.frame, self.last_tick.elapsed()) {
            thread::sleep(rest);
        }
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        delta
    }
}

/// Time per frame; zero fps means uncapped
fn frame_budget(fps: u32) -> Duration {
    if fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs(1) / fps
    }
}

fn remaining(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|rest| !rest.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        assert_eq!(frame_budget(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_budget(0), Duration::ZERO);
    }

    #[test]
    fn test_remaining() {
        let budget = Duration::from_millis(16);
        assert_eq!(remaining(budget, Duration::from_millis(10)), Some(Duration::from_millis(6)));
        assert_eq!(remaining(budget, Duration::from_millis(16)), None);
        assert_eq!(remaining(budget, Duration::from_millis(40)), None);
    }

    #[test]
    fn test_tick_reports_at_least_budget() {
        let mut clock = FrameClock::new(200);
        let delta = clock.tick();
        assert!(delta >= Duration::from_millis(5));
    }
}
