use std::time::{Duration, Instant};

/// Per-frame `dt` for the lab loop.
///
/// Frames are also counted over a fixed window so the loop can log a steady
/// fps figure instead of one per frame.
pub struct FrameClock {
    last_tick: Instant,
    dt: f32,
    fps_window: Duration,
    window_elapsed: Duration,
    window_frames: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl FrameClock {
    pub fn new(fps_window: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            dt: 0.0,
            fps_window,
            window_elapsed: Duration::ZERO,
            window_frames: 0,
        }
    }

    /// Starts a new frame. Returns the average fps once a window has elapsed.
    pub fn tick(&mut self) -> Option<f32> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(elapsed)
    }

    /// Starts a new frame that took `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) -> Option<f32> {
        self.dt = elapsed.as_secs_f32();
        self.window_elapsed += elapsed;
        self.window_frames += 1;

        if self.window_elapsed < self.fps_window {
            return None;
        }
        let fps = self.window_frames as f32 / self.window_elapsed.as_secs_f32();
        self.window_elapsed = Duration::ZERO;
        self.window_frames = 0;
        Some(fps)
    }

    /// Seconds spent on the previous frame.
    pub fn delta_time(&self) -> f32 {
        self.dt
    }
}
