use std::time::Instant;

/// Wall clock feeding frame times into a simulation.
///
/// Each [`tick`](FrameClock::tick) returns the seconds elapsed since the previous tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last: Instant::now() }
    }

    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        elapsed
    }

    /// Forgets time spent while nothing was being simulated, e.g. after a pause.
    pub fn restart(&mut self) {
        self.last = Instant::now();
    }
}
