use std::time::Duration;

/// Repeating auto-advance schedule. Time only moves when the host calls `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoTimer {
    interval: Duration,
    elapsed: Duration,
}

impl AutoTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, elapsed: Duration::ZERO }
    }

    /// Moves the clock forward and returns how many ticks fell due.
    /// Each tick is rescheduled one interval after its own due time.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        due
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotatorState {
    pub current_index: Option<usize>,
    pub timer: Option<AutoTimer>,
}

impl RotatorState {
    pub fn timer_active(&self) -> bool {
        self.timer.is_some()
    }
}
