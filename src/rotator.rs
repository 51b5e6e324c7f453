use std::time::Duration;
use tracing::{debug, info, trace};
use crate::state::{AutoTimer, RotatorState};

/// What a rotator needs from whatever renders its slides.
pub trait SlideSurface {
    fn len(&self) -> usize;
    fn set_active(&mut self, index: usize, active: bool);
}

/// Keeps exactly one slide of a fixed set active and cycles through them on a timer.
///
/// The rotator never looks at the screen itself: the host forwards input through
/// [`Rotator::handle`] and drives time through [`Rotator::update`].
pub struct Rotator<S: SlideSurface> {
    label: String,
    surface: S,
    len: usize,
    interval: Duration,
    state: RotatorState,
}

impl<S: SlideSurface> Rotator<S> {
    pub fn new(label: impl Into<String>, mut surface: S, interval: Duration) -> Self {
        let label = label.into();
        let len = surface.len();

        let current_index = if len > 0 {
            for i in 0..len {
                surface.set_active(i, i == 0);
            }
            info!("{} rotator initialized with {} slides", label, len);
            Some(0)
        } else {
            info!("{} rotator: no slides found", label);
            None
        };

        Self {
            label,
            surface,
            len,
            interval,
            state: RotatorState { current_index, timer: None },
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    pub fn timer_active(&self) -> bool {
        self.state.timer_active()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Makes `index` the active slide. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) {
        if index >= self.len {
            debug!("{}: ignoring out-of-range slide {} (have {})", self.label, index, self.len);
            return;
        }
        for i in 0..self.len {
            self.surface.set_active(i, i == index);
        }
        self.state.current_index = Some(index);
        debug!("{}: showing slide {} of {}", self.label, index + 1, self.len);
    }

    /// Moves by `delta` slides with wrap-around and restarts the auto timer.
    pub fn step(&mut self, delta: isize) {
        if !self.move_by(delta) {
            return;
        }
        self.start_auto();
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    /// (Re)starts automatic advancement. Any running schedule is cancelled first.
    pub fn start_auto(&mut self) {
        self.pause_auto();
        if self.is_empty() {
            return;
        }
        self.state.timer = Some(AutoTimer::new(self.interval));
        trace!("{}: auto-advance every {:?}", self.label, self.interval);
    }

    pub fn pause_auto(&mut self) {
        if self.state.timer.take().is_some() {
            trace!("{}: auto-advance paused", self.label);
        }
    }

    /// Advances the rotator's clock by `dt`, firing every tick that falls due.
    pub fn update(&mut self, dt: Duration) {
        let due = match self.state.timer.as_mut() {
            Some(timer) => timer.advance(dt),
            None => return,
        };
        for _ in 0..due {
            self.move_by(1);
        }
    }

    fn move_by(&mut self, delta: isize) -> bool {
        let Some(current) = self.state.current_index else {
            return false;
        };
        let offset = delta.rem_euclid(self.len as isize) as usize;
        let target = (current + offset) % self.len;
        self.show(target);
        true
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SlideSurface;

    /// In-memory surface that remembers which slides are marked active.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub active: Vec<bool>,
        pub writes: usize,
    }

    impl RecordingSurface {
        pub fn with_len(len: usize) -> Self {
            Self { active: vec![false; len], writes: 0 }
        }

        pub fn active_indices(&self) -> Vec<usize> {
            self.active
                .iter()
                .enumerate()
                .filter_map(|(i, a)| a.then_some(i))
                .collect()
        }
    }

    impl SlideSurface for RecordingSurface {
        fn len(&self) -> usize {
            self.active.len()
        }

        fn set_active(&mut self, index: usize, active: bool) {
            self.active[index] = active;
            self.writes += 1;
        }
    }
}
