use std::time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Timing of one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    pub now: Instant,
    pub frame_index: u64,
    /// Frames ticked during the last completed one-second window; 0 until one completes.
    pub fps: u32,
}

/// Produces [`FrameTime`]s with clamped delta time and a frames-per-second count.
///
/// Clamping keeps a stalled or debugger-paused frame from producing a huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    window_start: Instant,
    window_frames: u32,
    fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self::starting_at(Instant::now(), dt_min, dt_max)
    }

    fn starting_at(start: Instant, dt_min: Duration, dt_max: Duration) -> Self {
        Self {
            last: start,
            frame_index: 0,
            dt_min,
            dt_max,
            window_start: start,
            window_frames: 0,
            fps: 0,
        }
    }

    /// Restarts delta and fps measurement, e.g. after the window was hidden.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.last = now;
        self.window_start = now;
        self.window_frames = 0;
    }

    #[inline]
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        self.window_frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= FPS_WINDOW {
            self.fps = self.window_frames;
            self.window_frames = 0;
            self.window_start = now;
        }

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
            fps: self.fps,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(start: Instant) -> FrameClock {
        FrameClock::starting_at(start, Duration::from_micros(100), Duration::from_millis(250))
    }

    #[test]
    fn frame_index_counts_ticks() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn dt_is_clamped() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        assert_eq!(c.tick_at(t0).dt, Duration::from_micros(100).as_secs_f32());
        assert_eq!(c.tick_at(t0 + Duration::from_secs(5)).dt, 0.25);
    }

    #[test]
    fn fps_reports_completed_window() {
        let t0 = Instant::now();
        let mut c = clock(t0);

        // 60 ticks spread over one second.
        let mut last = None;
        for i in 1..=60u64 {
            last = Some(c.tick_at(t0 + Duration::from_micros(i * 1_000_000 / 60)));
            if i < 60 {
                assert_eq!(last.map(|f| f.fps), Some(0), "tick {i}");
            }
        }
        assert_eq!(last.map(|f| f.fps), Some(60));

        // Holds until the next window completes.
        let next = c.tick_at(t0 + Duration::from_millis(1_100));
        assert_eq!(next.fps, 60);
    }
}
