#![forbid(unsafe_op_in_unsafe_fn)]

use glam::{Quat, Vec2, Vec3};

use crate::rig::CameraRig;

/// Raw camera input for a single frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct CamInput {
    /// Raw pointer delta in pixels.
    pub look_delta: Vec2,
    /// Movement axes: x = right, y = up, z = forward (positive forward).
    pub move_axis: Vec3,
    /// Sprint modifier held.
    pub sprint: bool,
    /// Cancel key went down this frame (edge).
    pub cancel_pressed: bool,
    /// Primary button went down this frame (edge).
    pub primary_pressed: bool,
}

/// Free-fly controller with damped velocity and a cursor-lock gate.
///
/// While locked: pointer delta turns into yaw/pitch (pitch clamped),
/// held movement keys accumulate velocity along the camera orientation,
/// and with no key held the velocity decays exponentially. The cancel
/// key drops the lock; while unlocked everything is suspended until the
/// primary button re-locks.
#[derive(Clone, Copy, Debug)]
pub struct FlyCamController {
    pub yaw: f32,
    pub pitch: f32,
    pub velocity: Vec3,

    pub move_speed: f32,
    pub sprint_multiplier: f32,
    /// Decay rate toward zero velocity when no movement key is held.
    pub damping: f32,
    /// Radians of rotation per pixel of pointer motion.
    pub look_sens: f32,
    /// Pitch clamp in radians, symmetric about the horizon.
    pub pitch_limit: f32,

    cursor_locked: bool,
}

impl Default for FlyCamController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            velocity: Vec3::ZERO,

            move_speed: 8.0,
            sprint_multiplier: 2.0,
            damping: 5.0,
            look_sens: 0.12f32.to_radians(),
            pitch_limit: 85f32.to_radians(),

            cursor_locked: true,
        }
    }
}

impl FlyCamController {
    /// Whether the controller wants the cursor locked right now.
    #[inline]
    pub fn cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    /// Advances one frame and writes the resulting pose into `rig`.
    pub fn apply(&mut self, rig: &mut CameraRig, input: &CamInput, dt: f32) {
        if input.cancel_pressed {
            self.cursor_locked = false;
        }

        if !self.cursor_locked {
            // Look and move are suspended; only a primary-button press
            // re-arms the controller.
            if input.primary_pressed {
                self.cursor_locked = true;
            }
            return;
        }

        // Pointer right turns right (negative yaw about +Y in RH),
        // pointer up looks up (window +Y points down).
        self.yaw -= input.look_delta.x * self.look_sens;
        self.pitch -= input.look_delta.y * self.look_sens;
        self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);

        rig.rotation = Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch);

        // move_axis.z is forward; local forward is -Z.
        let local = Vec3::new(input.move_axis.x, input.move_axis.y, -input.move_axis.z);
        let len = local.length();
        if len > 1e-6 {
            let world_dir = rig.rotation * (local / len);
            let speed = if input.sprint {
                self.move_speed * self.sprint_multiplier
            } else {
                self.move_speed
            };
            self.velocity += world_dir * speed * dt;
        } else {
            let k = (self.damping * dt).clamp(0.0, 1.0);
            self.velocity = self.velocity.lerp(Vec3::ZERO, k);
        }

        rig.position += self.velocity * dt;
    }
}
