/// Frame timing for the input lifecycle
///
/// Measures the time between consecutive frames and reports it as a
/// [`DeltaTime`] in whole milliseconds. Also tracks the frame count and an
/// averaged FPS figure for diagnostics.
use std::time::{Duration, Instant};

/// Longest frame delta ever reported, in milliseconds.
/// Stalls (debugger breaks, window drags) are clamped to this.
pub const MAX_FRAME_DELTA: u32 = 250;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Time elapsed between two frames, in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DeltaTime {
    millis: u32,
}

impl DeltaTime {
    /// Zero-length delta, reported for the very first frame
    pub const ZERO: Self = Self { millis: 0 };

    /// Create a delta from milliseconds, clamped to [`MAX_FRAME_DELTA`]
    pub fn from_millis(millis: u32) -> Self {
        Self {
            millis: millis.min(MAX_FRAME_DELTA),
        }
    }

    fn from_duration(duration: Duration) -> Self {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Self::from_millis(millis)
    }

    /// Delta in milliseconds
    pub fn as_millis(&self) -> u32 {
        self.millis
    }

    /// Delta in seconds, for scaling movement
    pub fn as_secs_f32(&self) -> f32 {
        self.millis as f32 / 1000.0
    }

    /// Delta as a `Duration`
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.millis as u64)
    }
}

/// Frame clock state
#[derive(Debug)]
pub struct FrameClock {
    /// Time of last tick, `None` until the first tick
    last_tick: Option<Instant>,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Number of ticks so far
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    /// Create a new frame clock
    pub fn new() -> Self {
        Self {
            last_tick: None,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Advance the clock to now and return the time since the last tick
    pub fn tick(&mut self) -> DeltaTime {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now`. The first tick reports a zero delta.
    pub(crate) fn tick_at(&mut self, now: Instant) -> DeltaTime {
        let frame_time = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        DeltaTime::from_duration(frame_time)
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of ticks
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
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
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), DeltaTime::ZERO);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_tick_measures_milliseconds() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);

        let delta = clock.tick_at(start + Duration::from_millis(16));
        assert_eq!(delta.as_millis(), 16);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);

        let delta = clock.tick_at(start + Duration::from_secs(3));
        assert_eq!(delta.as_millis(), MAX_FRAME_DELTA);
    }

    #[test]
    fn test_delta_conversions() {
        let delta = DeltaTime::from_millis(500);
        assert_eq!(delta.as_millis(), MAX_FRAME_DELTA);

        let delta = DeltaTime::from_millis(20);
        assert_relative_eq!(delta.as_secs_f32(), 0.02, epsilon = 0.0001);
        assert_eq!(delta.as_duration(), Duration::from_millis(20));
    }

    #[test]
    fn test_frame_counting() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_fps_average() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        for i in 1..=19u64 {
            clock.tick_at(start + Duration::from_millis(20 * i));
        }

        // 19 frames of 20ms plus the zero-length first frame
        assert!(clock.fps() > 45.0 && clock.fps() < 55.0);
    }
}
