use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowAttributes, WindowId},
};

use crate::{
    config::EngineConfig,
    error::EngineResult,
    frame::{FrameContext, FrameLimits},
    input::InputState,
    module::Module,
    phase::FramePhase,
    schedule::FrameSchedule,
    signals::ShutdownFlag,
    telemetry::Telemetry,
    time::Time,
};

pub struct Engine {
    cfg: EngineConfig,
    limits: FrameLimits,
    schedule: FrameSchedule,
}

impl Engine {
    pub fn new(cfg: EngineConfig) -> Self {
        let limits = FrameLimits {
            log_fps: cfg.log_fps,
            ..FrameLimits::default()
        };
        Self {
            cfg,
            limits,
            schedule: FrameSchedule::new(),
        }
    }

    pub fn add_module<M: Module + 'static>(&mut self, m: M) {
        self.schedule.add_module(m);
    }

    pub fn run(self) -> EngineResult<()> {
        let event_loop = EventLoop::new()?;
        let mut app = EngineApp::new(self);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

struct EngineApp {
    engine: Engine,

    window: Option<Window>,
    window_id: Option<WindowId>,

    exit_requested: bool,
    shutdown_done: bool,
    started: bool,

    limits: FrameLimits,
    time: Time,
    input: InputState,
    telemetry: Telemetry,
    viewport: (u32, u32),

    cursor_lock_request: Option<bool>,
    cursor_locked: bool,

    last: Instant,
    shutdown_flag: ShutdownFlag,
}

impl EngineApp {
    fn new(engine: Engine) -> Self {
        let limits = engine.limits.clone();
        let viewport = (engine.cfg.width, engine.cfg.height);

        let shutdown_flag = ShutdownFlag::new();
        if let Err(e) = shutdown_flag.install_ctrlc() {
            log::warn!("ctrl-c handler not installed: {e}");
        }

        let mut telemetry = Telemetry::new();
        telemetry.configure_fps_logging(limits.log_fps, limits.fps_log_period_sec);

        Self {
            engine,

            window: None,
            window_id: None,

            exit_requested: false,
            shutdown_done: false,
            started: false,

            limits,
            time: Time::new(),
            input: InputState::new(),
            telemetry,
            viewport,

            cursor_lock_request: None,
            cursor_locked: false,

            last: Instant::now(),
            shutdown_flag,
        }
    }

    fn start_if_needed(&mut self) {
        if self.started || self.window.is_none() {
            return;
        }

        log::info!("boot");

        let mut ctx = FrameContext {
            time: &self.time,
            input: &self.input,
            telemetry: &mut self.telemetry,
            viewport: self.viewport,
            cursor_locked: self.cursor_locked,
            cursor_lock_request: &mut self.cursor_lock_request,
            exit_requested: &mut self.exit_requested,
        };
        self.engine.schedule.on_start(&mut ctx);

        self.started = true;
        self.last = Instant::now();
        self.apply_cursor_lock_request();
    }

    fn shutdown_once(&mut self, el: &ActiveEventLoop) {
        if self.shutdown_done {
            return;
        }
        self.shutdown_done = true;

        let mut ctx = FrameContext {
            time: &self.time,
            input: &self.input,
            telemetry: &mut self.telemetry,
            viewport: self.viewport,
            cursor_locked: self.cursor_locked,
            cursor_lock_request: &mut self.cursor_lock_request,
            exit_requested: &mut self.exit_requested,
        };
        self.engine.schedule.on_shutdown(&mut ctx);

        log::info!("shutdown");
        el.exit();
    }

    /// Applies a pending lock request emitted by behavior modules.
    ///
    /// `Locked` is not supported everywhere; fall back to `Confined`, and
    /// failing that leave the cursor free and visible.
    fn apply_cursor_lock_request(&mut self) {
        let Some(lock) = self.cursor_lock_request.take() else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        if lock {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            match grabbed {
                Ok(()) => {
                    window.set_cursor_visible(false);
                    self.cursor_locked = true;
                }
                Err(e) => {
                    log::debug!("cursor lock request failed: {e:?}");
                    window.set_cursor_visible(true);
                    self.cursor_locked = false;
                }
            }
        } else {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                log::debug!("cursor unlock request failed: {e:?}");
            }
            window.set_cursor_visible(true);
            self.cursor_locked = false;
        }
    }
}

impl ApplicationHandler for EngineApp {
    fn resumed(&mut self, el: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.engine.cfg.title.clone())
            .with_inner_size(LogicalSize::new(self.engine.cfg.width, self.engine.cfg.height));

        let window = match el.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("failed to create window: {e}");
                el.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.viewport = (size.width.max(1), size.height.max(1));

        self.window_id = Some(window.id());
        self.window = Some(window);

        self.start_if_needed();
    }

    fn window_event(&mut self, _el: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.exit_requested = true,
            WindowEvent::Resized(size) => {
                self.viewport = (size.width.max(1), size.height.max(1));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.on_key(code, event.state);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.on_mouse_button(button, state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.on_cursor_moved(position.x as f32, position.y as f32);
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _el: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        // Raw motion keeps reporting while the cursor is locked/hidden.
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.on_mouse_motion(dx as f32, dy as f32);
        }
    }

    fn about_to_wait(&mut self, el: &ActiveEventLoop) {
        el.set_control_flow(ControlFlow::Poll);

        if !self.started {
            return;
        }

        if self.shutdown_flag.is_set() {
            self.exit_requested = true;
        }
        if self.exit_requested {
            self.shutdown_once(el);
            return;
        }

        let now = Instant::now();
        let raw_dt = now.duration_since(self.last);
        self.last = now;

        self.time.dt_sec = raw_dt.as_secs_f32().min(self.limits.max_dt_sec);
        self.time.t_sec += raw_dt.as_secs_f64();
        self.time.frame_index += 1;

        let mut ctx = FrameContext {
            time: &self.time,
            input: &self.input,
            telemetry: &mut self.telemetry,
            viewport: self.viewport,
            cursor_locked: self.cursor_locked,
            cursor_lock_request: &mut self.cursor_lock_request,
            exit_requested: &mut self.exit_requested,
        };

        self.engine.schedule.run_phase(FramePhase::BeginFrame, &mut ctx);
        self.engine.schedule.run_phase(FramePhase::Input, &mut ctx);
        self.engine.schedule.run_phase(FramePhase::Update, &mut ctx);
        self.engine.schedule.run_phase(FramePhase::LateUpdate, &mut ctx);
        self.engine.schedule.run_phase(FramePhase::EndFrame, &mut ctx);

        ctx.telemetry.frame_tick(raw_dt);

        let exit_now = *ctx.exit_requested;
        drop(ctx);

        self.apply_cursor_lock_request();

        // Edges consumed; subsequent events accumulate for the next frame.
        self.input.begin_frame();

        if exit_now {
            self.shutdown_once(el);
            return;
        }

        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}
