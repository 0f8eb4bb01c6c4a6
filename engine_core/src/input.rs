use std::collections::HashSet;

use winit::event::ElementState;

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// Per-frame input snapshot.
///
/// This API is intentionally low-level (keys, buttons, pointer) and stable.
/// Higher-level bindings (actions, axes) live in the behavior layers.
///
/// `*_pressed` / `*_released` are edge states: true only on the frame the
/// transition happened. The platform calls `begin_frame` before feeding the
/// frame's events, which clears edges and accumulated deltas.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,

    buttons_down: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,

    mouse_x: f32,
    mouse_y: f32,

    // Raw device motion accumulated over the frame. Distinct from cursor
    // position deltas: it keeps reporting while the cursor is locked.
    mouse_dx: f32,
    mouse_dy: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears edge states and deltas. Call once per frame, before events.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
    }

    pub fn on_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                // Key repeat arrives as repeated Pressed events; only the
                // first transition counts as an edge.
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            ElementState::Released => {
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
        }
    }

    pub fn on_mouse_button(&mut self, btn: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.buttons_down.insert(btn) {
                    self.buttons_pressed.insert(btn);
                }
            }
            ElementState::Released => {
                if self.buttons_down.remove(&btn) {
                    self.buttons_released.insert(btn);
                }
            }
        }
    }

    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    pub fn on_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_dx += dx;
        self.mouse_dy += dy;
    }

    #[inline]
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    #[inline]
    pub fn mouse_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    #[inline]
    pub fn mouse_pressed(&self, btn: MouseButton) -> bool {
        self.buttons_pressed.contains(&btn)
    }

    #[inline]
    pub fn mouse_released(&self, btn: MouseButton) -> bool {
        self.buttons_released.contains(&btn)
    }

    #[inline]
    pub fn mouse_pos(&self) -> (f32, f32) {
        (self.mouse_x, self.mouse_y)
    }

    #[inline]
    pub fn mouse_delta(&self) -> (f32, f32) {
        (self.mouse_dx, self.mouse_dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_is_edge_not_level() {
        let mut input = InputState::new();

        input.begin_frame();
        input.on_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(input.mouse_pressed(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        // Next frame: still held, no new edge.
        input.begin_frame();
        assert!(!input.mouse_pressed(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.begin_frame();
        input.on_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(input.mouse_released(MouseButton::Left));
        assert!(!input.mouse_down(MouseButton::Left));
    }

    #[test]
    fn key_repeat_does_not_refire_edge() {
        let mut input = InputState::new();

        input.begin_frame();
        input.on_key(KeyCode::KeyW, ElementState::Pressed);
        assert!(input.key_pressed(KeyCode::KeyW));

        input.begin_frame();
        input.on_key(KeyCode::KeyW, ElementState::Pressed); // OS repeat
        assert!(!input.key_pressed(KeyCode::KeyW));
        assert!(input.key_down(KeyCode::KeyW));

        input.begin_frame();
        input.on_key(KeyCode::KeyW, ElementState::Released);
        assert!(input.key_released(KeyCode::KeyW));
        assert!(!input.key_down(KeyCode::KeyW));
    }

    #[test]
    fn motion_accumulates_within_a_frame_and_resets() {
        let mut input = InputState::new();

        input.begin_frame();
        input.on_mouse_motion(3.0, -1.0);
        input.on_mouse_motion(2.0, 4.0);
        assert_eq!(input.mouse_delta(), (5.0, 3.0));

        input.begin_frame();
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
    }
}
