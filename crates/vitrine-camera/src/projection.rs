#![forbid(unsafe_op_in_unsafe_fn)]

use glam::Mat4;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Perspective projection. Right-handed, clip Z 0..1.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perspective {
    /// Vertical FOV in radians.
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    #[inline]
    pub fn new(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fovy,
            aspect: aspect.max(1e-6),
            near: near.max(1e-6),
            far: far.max(near + 1e-3),
        }
    }

    #[inline]
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        self.aspect = w / h;
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy, self.aspect, self.near, self.far)
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self::new(60f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_drives_aspect() {
        let mut p = Perspective::default();
        p.set_viewport(1920, 1080);
        assert!((p.aspect - 16.0 / 9.0).abs() < 1e-6);
        p.set_viewport(0, 0); // degenerate sizes are clamped
        assert!((p.aspect - 1.0).abs() < 1e-6);
    }
}
