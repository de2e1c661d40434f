use std::time::{Duration, Instant};

/// Counts ticks and reports the average rate once per interval.
///
/// The rate is averaged over the whole interval rather than derived from the
/// last delta, so a single slow frame does not make the readout jump.
#[derive(Debug, Clone)]
pub struct FramerateCounter {
    window_start: Instant,
    frames_in_window: u32,
    total_frames: u64,
    interval: Duration,
    last_rate: Option<f32>,
}

impl FramerateCounter {
    const MIN_INTERVAL: Duration = Duration::from_millis(1);

    /// Creates a counter reporting once per second.
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    /// Creates a counter with a custom report interval.
    ///
    /// Intervals shorter than 1ms are raised to 1ms.
    pub fn with_interval(interval: Duration) -> Self {
        Self::with_interval_at(interval, Instant::now())
    }

    /// Like [`FramerateCounter::with_interval`] with an explicit start time.
    pub fn with_interval_at(interval: Duration, start: Instant) -> Self {
        debug_assert!(!interval.is_zero(), "report interval must be non-zero");
        Self {
            window_start: start,
            frames_in_window: 0,
            total_frames: 0,
            interval: interval.max(Self::MIN_INTERVAL),
            last_rate: None,
        }
    }

    /// Discards the current window, ie after a pause or a resize.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn reset_at(&mut self, now: Instant) {
        log::trace!("framerate window reset after {} frames", self.frames_in_window);
        self.window_start = now;
        self.frames_in_window = 0;
        self.last_rate = None;
    }

    /// Records one frame; returns the rate when an interval has completed.
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.frames_in_window = self.frames_in_window.saturating_add(1);
        self.total_frames = self.total_frames.wrapping_add(1);

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }

        let rate = self.frames_in_window as f32 / elapsed.as_secs_f32();
        self.window_start = now;
        self.frames_in_window = 0;
        self.last_rate = Some(rate);
        Some(rate)
    }

    /// Most recently reported rate, `None` until the first interval completes.
    #[inline]
    pub fn last_rate(&self) -> Option<f32> {
        self.last_rate
    }

    #[inline]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FramerateCounter {
    fn default() -> Self {
        Self::new()
    }
}
