use std::time::{Duration, Instant};

/// Longest step handed to the simulation; a stalled window (drag, resize,
/// debugger) must not fling the viewpoint through the map.
pub const MAX_FRAME_DT: Duration = Duration::from_millis(250);

/// Monotonic frame clock producing Δt between consecutive frames.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or construction), clamped.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self.tick_at(now);
        self.last = now;
        dt
    }

    fn tick_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.last)
            .min(MAX_FRAME_DT)
            .as_secs_f32()
    }
}
