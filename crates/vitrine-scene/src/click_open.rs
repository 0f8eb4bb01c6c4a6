#![forbid(unsafe_op_in_unsafe_fn)]

use glam::Vec2;

use vitrine_camera::{CameraRig, Perspective};

use crate::ray::Ray;
use crate::scene::{ColliderId, Scene};

/// Side-effect seam for "open this URL in the system browser".
///
/// A trait so the frame logic stays testable with a recording double;
/// the binary injects the real platform opener.
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> anyhow::Result<()>;
}

/// The clickable collider and the URL it opens. Built once at scene
/// construction, immutable afterwards.
#[derive(Clone, Debug)]
pub struct ClickTarget {
    pub collider: ColliderId,
    pub url: String,
}

/// Per-frame predicate-and-side-effect: on a primary-press edge, cast a
/// ray from the camera through the cursor and open the target URL when
/// the first surface hit is the configured collider.
///
/// Missing configuration is reported once at construction; a disabled
/// handler stays silent every frame thereafter.
pub struct ClickOpenHandler {
    target: Option<ClickTarget>,
}

impl ClickOpenHandler {
    pub fn new(target: Option<ClickTarget>) -> Self {
        if target.is_none() {
            log::error!("click-open: no target collider assigned, handler disabled");
        }
        Self { target }
    }

    pub fn enabled(&self) -> bool {
        self.target.is_some()
    }

    /// Runs one frame. `primary_pressed` must be the press edge, not the
    /// held state, so a qualifying click fires exactly once.
    pub fn frame(
        &self,
        primary_pressed: bool,
        rig: &CameraRig,
        proj: &Perspective,
        cursor_pos: Vec2,
        viewport: Vec2,
        scene: &Scene,
        opener: &mut dyn UrlOpener,
    ) {
        let Some(target) = self.target.as_ref() else {
            return;
        };
        if !primary_pressed {
            return;
        }

        let ray = Ray::from_screen(rig, proj, cursor_pos, viewport);
        let Some(hit) = scene.raycast(&ray) else {
            return;
        };
        if hit.collider != target.collider {
            return;
        }

        if target.url.is_empty() {
            log::warn!("click-open: target hit but URL is empty");
            return;
        }
        if let Err(e) = opener.open(&target.url) {
            log::error!("click-open: failed to open {}: {e}", target.url);
        }
    }
}
