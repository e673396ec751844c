use std::time::Instant;

use log::info;

/// Seconds between FPS reports.
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Longest frame delta fed to the scroll tween; stalls (window drags,
/// breakpoints) would otherwise snap the camera to its target.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Minimal frame clock - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick, capped at `MAX_FRAME_DELTA`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_FRAME_DELTA)
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame count over `FPS_UPDATE_INTERVAL` windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame. Returns the new average when a window completes.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        self.fps = self.frame_count as f32 / self.elapsed;
        info!("FPS: {:.1}", self.fps);
        self.frame_count = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
