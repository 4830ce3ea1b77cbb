use std::time::Duration;

/// Most ticks run for a single frame. A long stall (window drag, breakpoint)
/// drops the rest instead of fast-forwarding the snake.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

/// Fixed-timestep clock: feed it frame times, it says how many game steps
/// are due.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    accumulated: Duration,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Adds `dt` of elapsed time and returns the number of due ticks.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulated += dt;

        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
            if due == MAX_CATCH_UP_TICKS {
                self.accumulated = Duration::ZERO;
                break;
            }
        }
        due
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
