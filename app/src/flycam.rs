use std::{cell::RefCell, rc::Rc};

use glam::{Vec2, Vec3};

use vitrine_camera::{CamInput, CameraRig, FlyCamController, Perspective};
use vitrine_core::{
    config::CameraConfig,
    frame::FrameContext,
    input::{KeyCode, MouseButton},
    module::Module,
    phase::FramePhase,
};

/// Camera pose shared between behaviors. The fly controller writes it,
/// the click handler reads it; the frame loop is single-threaded.
pub struct SharedView {
    pub rig: CameraRig,
    pub proj: Perspective,
}

/// Polls the input snapshot each frame and drives the free-fly controller.
pub struct FlyCamModule {
    view: Rc<RefCell<SharedView>>,
    ctrl: FlyCamController,
    was_locked: bool,
}

impl FlyCamModule {
    pub fn new(view: Rc<RefCell<SharedView>>, cfg: &CameraConfig) -> Self {
        let mut ctrl = FlyCamController::default();
        ctrl.move_speed = cfg.move_speed;
        ctrl.sprint_multiplier = cfg.sprint_multiplier;
        ctrl.damping = cfg.damping;
        ctrl.look_sens = cfg.mouse_sensitivity.to_radians();
        ctrl.pitch_limit = cfg.pitch_clamp_deg.to_radians();
        Self {
            view,
            ctrl,
            was_locked: false,
        }
    }

    fn read_input(ctx: &FrameContext<'_>) -> CamInput {
        let input = ctx.input;

        let mut axis = Vec3::ZERO;
        if input.key_down(KeyCode::KeyW) {
            axis.z += 1.0;
        }
        if input.key_down(KeyCode::KeyS) {
            axis.z -= 1.0;
        }
        if input.key_down(KeyCode::KeyD) {
            axis.x += 1.0;
        }
        if input.key_down(KeyCode::KeyA) {
            axis.x -= 1.0;
        }
        if input.key_down(KeyCode::Space) {
            axis.y += 1.0;
        }
        if input.key_down(KeyCode::ControlLeft) {
            axis.y -= 1.0;
        }

        let (dx, dy) = input.mouse_delta();

        CamInput {
            look_delta: Vec2::new(dx, dy),
            move_axis: axis,
            sprint: input.key_down(KeyCode::ShiftLeft),
            cancel_pressed: input.key_pressed(KeyCode::Escape),
            primary_pressed: input.mouse_pressed(MouseButton::Left),
        }
    }
}

impl Module for FlyCamModule {
    fn on_start(&mut self, ctx: &mut FrameContext<'_>) {
        self.was_locked = self.ctrl.cursor_locked();
        *ctx.cursor_lock_request = Some(self.was_locked);
        log::info!(
            "flycam ready (speed={}, sprint x{})",
            self.ctrl.move_speed,
            self.ctrl.sprint_multiplier
        );
    }

    fn on_phase(&mut self, phase: FramePhase, ctx: &mut FrameContext<'_>) {
        if phase != FramePhase::Update {
            return;
        }

        let cam_input = Self::read_input(ctx);

        let mut view = self.view.borrow_mut();
        view.proj.set_viewport(ctx.viewport.0, ctx.viewport.1);
        self.ctrl.apply(&mut view.rig, &cam_input, ctx.time.dt_sec);

        let locked = self.ctrl.cursor_locked();
        if locked != self.was_locked {
            self.was_locked = locked;
            *ctx.cursor_lock_request = Some(locked);
        }
    }
}
