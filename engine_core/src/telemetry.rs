use std::time::{Duration, Instant};

/// Minimal telemetry: periodic fps log plus the last recorded scope.
pub struct Telemetry {
    pub fps: f32,
    pub dt_ms: f32,

    fps_last: Instant,
    fps_frames: u32,
    fps_period_sec: f32,
    fps_enabled: bool,

    last_scope_name: &'static str,
    last_scope_ms: f32,
}

impl Telemetry {
    pub fn new() -> Self {
        Self {
            fps: 0.0,
            dt_ms: 0.0,
            fps_last: Instant::now(),
            fps_frames: 0,
            fps_period_sec: 1.0,
            fps_enabled: true,
            last_scope_name: "none",
            last_scope_ms: 0.0,
        }
    }

    pub fn configure_fps_logging(&mut self, enabled: bool, period_sec: f32) {
        self.fps_enabled = enabled;
        self.fps_period_sec = period_sec.max(0.25);
    }

    pub fn frame_tick(&mut self, dt: Duration) {
        self.dt_ms = dt.as_secs_f32() * 1000.0;

        if !self.fps_enabled {
            return;
        }

        self.fps_frames += 1;
        let elapsed = self.fps_last.elapsed().as_secs_f32();

        if elapsed >= self.fps_period_sec {
            let secs = elapsed.max(0.0001);
            self.fps = (self.fps_frames as f32) / secs;

            log::info!("fps={:.1} dt_ms={:.2}", self.fps, self.dt_ms);

            self.fps_frames = 0;
            self.fps_last = Instant::now();
        }
    }

    /// Records a phase/system timing. Keeps only the last value (cheap).
    #[inline]
    pub fn record_scope(&mut self, name: &'static str, dur: Duration) {
        self.last_scope_name = name;
        self.last_scope_ms = dur.as_secs_f32() * 1000.0;
    }

    pub fn last_scope(&self) -> (&'static str, f32) {
        (self.last_scope_name, self.last_scope_ms)
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
