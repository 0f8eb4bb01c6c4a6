use std::{cell::RefCell, rc::Rc};

use glam::Vec2;

use vitrine_core::{
    frame::FrameContext, input::MouseButton, module::Module, phase::FramePhase,
};
use vitrine_scene::{ClickOpenHandler, ClickTarget, Scene, UrlOpener};

use crate::flycam::SharedView;

/// Raycasts from the camera through the cursor on a primary-press edge
/// and opens the configured URL when the target collider is hit first.
pub struct ClickOpenModule {
    view: Rc<RefCell<SharedView>>,
    scene: Scene,
    handler: ClickOpenHandler,
    opener: Box<dyn UrlOpener>,
}

impl ClickOpenModule {
    pub fn new(
        view: Rc<RefCell<SharedView>>,
        scene: Scene,
        target: Option<ClickTarget>,
        opener: Box<dyn UrlOpener>,
    ) -> Self {
        Self {
            view,
            scene,
            handler: ClickOpenHandler::new(target),
            opener,
        }
    }
}

/// A grabbed cursor reports no position; the host convention for a
/// locked pointer is the viewport center.
fn click_point(cursor_locked: bool, cursor_pos: (f32, f32), viewport: Vec2) -> Vec2 {
    if cursor_locked {
        viewport * 0.5
    } else {
        Vec2::new(cursor_pos.0, cursor_pos.1)
    }
}

impl Module for ClickOpenModule {
    fn on_phase(&mut self, phase: FramePhase, ctx: &mut FrameContext<'_>) {
        if phase != FramePhase::Update {
            return;
        }

        let pressed = ctx.input.mouse_pressed(MouseButton::Left);
        let viewport = Vec2::new(ctx.viewport.0 as f32, ctx.viewport.1 as f32);
        let cursor = click_point(ctx.cursor_locked, ctx.input.mouse_pos(), viewport);

        let view = self.view.borrow();
        self.handler.frame(
            pressed,
            &view.rig,
            &view.proj,
            cursor,
            viewport,
            &self.scene,
            self.opener.as_mut(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use vitrine_camera::{CameraRig, Perspective};
    use vitrine_scene::Ray;

    #[test]
    fn locked_cursor_clicks_through_the_viewport_center() {
        let viewport = Vec2::new(1280.0, 720.0);
        assert_eq!(click_point(true, (0.0, 0.0), viewport), viewport * 0.5);
        assert_eq!(
            click_point(false, (321.0, 99.0), viewport),
            Vec2::new(321.0, 99.0)
        );
    }

    #[test]
    fn center_ray_from_spawn_hits_the_placard_where_zero_pixel_misses() {
        // Spawn pose and placard from the demo scene.
        let rig = CameraRig::new(Vec3::new(0.0, 1.2, 0.0), glam::Quat::IDENTITY);
        let mut proj = Perspective::default();
        let viewport = Vec2::new(1280.0, 720.0);
        proj.set_viewport(viewport.x as u32, viewport.y as u32);

        let scene = crate::build_scene();
        let placard = scene.find("placard").unwrap();

        let center = Ray::from_screen(&rig, &proj, viewport * 0.5, viewport);
        let hit = scene.raycast(&center).unwrap();
        assert_eq!(hit.collider, placard);

        // The stale (0, 0) cursor default aims at the top-left sky.
        let corner = Ray::from_screen(&rig, &proj, Vec2::ZERO, viewport);
        let corner_hit = scene.raycast(&corner);
        assert!(corner_hit.map_or(true, |h| h.collider != placard));
    }
}

