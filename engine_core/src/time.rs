/// Per-frame clock, advanced once by the loop before phases run.
#[derive(Debug, Clone)]
pub struct Time {
    /// Delta time (sec) of the current frame, clamped by `FrameLimits::max_dt_sec`.
    pub dt_sec: f32,

    /// Absolute time (sec) since startup.
    pub t_sec: f64,

    /// Frame counter.
    pub frame_index: u64,
}

impl Time {
    pub fn new() -> Self {
        Self {
            dt_sec: 0.0,
            t_sec: 0.0,
            frame_index: 0,
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
