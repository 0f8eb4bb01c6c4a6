use crate::{input::InputState, telemetry::Telemetry, time::Time};

/// Hard limits for a frame. Subsystems must fit within these.
#[derive(Debug, Clone)]
pub struct FrameLimits {
    /// Clamp on dt (sec), protects integration from pauses/minimize.
    pub max_dt_sec: f32,

    /// Log FPS once per period.
    pub log_fps: bool,
    pub fps_log_period_sec: f32,
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            max_dt_sec: 0.25,
            log_fps: true,
            fps_log_period_sec: 1.0,
        }
    }
}

/// Per-frame contract between the core and modules.
///
/// Modules stay platform-agnostic: they see the input snapshot and the
/// viewport, and talk back through request slots the loop applies after
/// phases run.
pub struct FrameContext<'a> {
    pub time: &'a Time,
    pub input: &'a InputState,
    pub telemetry: &'a mut Telemetry,

    /// Viewport size in physical pixels (w, h).
    pub viewport: (u32, u32),

    /// Whether the cursor is currently grabbed. While grabbed the window
    /// reports no cursor position, only raw deltas.
    pub cursor_locked: bool,

    /// Desired cursor-lock state. The platform applies it after phases.
    pub cursor_lock_request: &'a mut Option<bool>,

    /// Soft exit request.
    pub exit_requested: &'a mut bool,
}
