use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a frame rate that may change between frames.
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Time one frame may take at `frame_rate` frames per second.
    pub fn budget(frame_rate: u32) -> Duration {
        Duration::from_secs(1) / frame_rate.max(1)
    }

    /// What is left of the frame budget at `now`.
    pub fn remaining(&self, now: Instant, frame_rate: u32) -> Duration {
        Self::budget(frame_rate).saturating_sub(now.duration_since(self.last_tick))
    }

    /// Sleeps out the rest of the current frame and starts the next one.
    pub fn throttle(&mut self, frame_rate: u32) {
        let wait = self.remaining(Instant::now(), frame_rate);
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        self.last_tick = Instant::now();
    }
}
