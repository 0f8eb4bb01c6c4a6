#![forbid(unsafe_op_in_unsafe_fn)]

use glam::{Vec2, Vec3, Vec4, Vec4Swizzles};

use vitrine_camera::{CameraRig, Perspective};

/// A directed line used for mouse picking.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Casts from the camera through a screen position (pixels, origin
    /// top-left) by unprojecting the near and far clip points.
    pub fn from_screen(
        rig: &CameraRig,
        proj: &Perspective,
        screen_pos: Vec2,
        viewport: Vec2,
    ) -> Self {
        let ndc_x = (2.0 * screen_pos.x) / viewport.x.max(1.0) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen_pos.y) / viewport.y.max(1.0);

        let inv = (proj.matrix() * rig.view_matrix()).inverse();

        // Clip depth is 0..1 (see `Perspective`).
        let near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near.xyz() / near.w;
        let far = far.xyz() / far.w;

        Self::new(near, far - near)
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Nearest positive intersection with a sphere.
    ///
    /// `dir` need not be unit length; `t` is in units of `dir`.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let a = self.dir.length_squared();
        if a < 1e-12 {
            return None;
        }
        let b = 2.0 * oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        let t = (-b - sqrt_d) / (2.0 * a);
        if t > 0.0 {
            return Some(t);
        }
        let t = (-b + sqrt_d) / (2.0 * a);
        if t > 0.0 {
            return Some(t);
        }
        None
    }

    /// Nearest positive intersection with an axis-aligned box (slab test).
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        // Division by a zero component yields +-inf, which the min/max
        // folding handles.
        let inv_dir = self.dir.recip();
        let t1 = (min - self.origin) * inv_dir;
        let t2 = (max - self.origin) * inv_dir;

        let t_enter = t1.min(t2).max_element();
        let t_exit = t1.max(t2).min_element();

        if t_enter > t_exit || t_exit < 0.0 {
            return None;
        }
        Some(if t_enter > 0.0 { t_enter } else { t_exit })
    }
}
