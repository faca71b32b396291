//! Frame timing
//!
//! Turns wall-clock timestamps into the delta handed to `sim::tick` and keeps
//! rolling FPS statistics.

use crate::consts::MAX_FRAME_DELTA;

/// Frames per statistics window before the average resets
pub const STATS_WINDOW: u32 = 10;

/// FPS statistics over the current window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Converts timestamps (seconds) into guarded frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    max_delta: f32,
    min_fps: f64,
    max_fps: f64,
    avg_fps: f64,
    frame_count: u32,
    window_ready: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DELTA)
    }
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_time: None,
            max_delta,
            min_fps: f64::INFINITY,
            max_fps: 0.0,
            avg_fps: 0.0,
            frame_count: 0,
            window_ready: false,
        }
    }

    /// Record a frame start at `now` and return the delta since the last one.
    ///
    /// The first call returns 0. Time running backwards or a non-finite
    /// timestamp also yields 0; long stalls are clamped to the max delta.
    pub fn advance(&mut self, now: f64) -> f32 {
        let Some(last) = self.last_time else {
            self.last_time = Some(now);
            return 0.0;
        };
        if !now.is_finite() {
            log::warn!("Non-finite frame timestamp {now}");
            return 0.0;
        }
        self.last_time = Some(now);

        let raw = now - last;
        if raw <= 0.0 {
            return 0.0;
        }
        self.record_fps(1.0 / raw);
        (raw as f32).min(self.max_delta)
    }

    fn record_fps(&mut self, fps: f64) {
        // Start a new window
        if self.frame_count >= STATS_WINDOW {
            self.frame_count = 0;
        }
        self.max_fps = self.max_fps.max(fps);
        self.min_fps = self.min_fps.min(fps);
        self.avg_fps = (self.avg_fps * self.frame_count as f64 + fps) / (self.frame_count + 1) as f64;
        self.frame_count += 1;
        if self.frame_count == STATS_WINDOW {
            self.window_ready = true;
        }
    }

    /// Current statistics, `None` before the first measured frame
    pub fn stats(&self) -> Option<FpsStats> {
        if self.max_fps == 0.0 {
            return None;
        }
        Some(FpsStats {
            min: self.min_fps,
            max: self.max_fps,
            avg: self.avg_fps,
        })
    }

    /// True once per completed window; the average restarts on the next frame
    pub fn window_complete(&mut self) -> bool {
        std::mem::take(&mut self.window_ready)
    }
}
