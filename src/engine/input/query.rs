// Read-only query surface over the current frame's input

use super::InputError;
use glam::Vec2;

/// Polling interface for keyboard, mouse and controller state.
///
/// Every method reads the snapshot built by the most recent frame refresh;
/// none of them change engine state.
///
/// The plain queries never fail: an unknown code, a device index with no
/// connected controller, or an analogue selector outside `{0, 1}` reads as
/// `false` / `0.0`. The `try_*` variants report those cases as
/// [`InputError`] instead. Controller queries validate the device index
/// before the code or selector.
pub trait Input {
    /// Number of controllers currently connected
    fn num_controllers(&self) -> usize;

    /// Check whether a controller occupies the given device index
    fn is_controller_connected(&self, device: u32) -> bool;

    /// Current cursor position as `(x, y)` in physical window pixels.
    /// Both coordinates come from the same snapshot.
    fn mouse_pos(&self) -> (i32, i32);

    fn try_key_held(&self, code: u32) -> Result<bool, InputError>;
    fn try_key_down(&self, code: u32) -> Result<bool, InputError>;
    fn try_key_up(&self, code: u32) -> Result<bool, InputError>;

    fn try_mouse_button_held(&self, code: u32) -> Result<bool, InputError>;
    fn try_mouse_button_down(&self, code: u32) -> Result<bool, InputError>;
    fn try_mouse_button_up(&self, code: u32) -> Result<bool, InputError>;

    fn try_cont_button_held(&self, device: u32, code: u32) -> Result<bool, InputError>;
    fn try_cont_button_down(&self, device: u32, code: u32) -> Result<bool, InputError>;
    fn try_cont_button_up(&self, device: u32, code: u32) -> Result<bool, InputError>;

    /// Value of one analogue axis in `[-1.0, 1.0]` after dead-zone handling.
    /// `stick` is 0 (left) or 1 (right); `axis` is 0 (X) or 1 (Y).
    fn try_cont_analogue_axis(&self, device: u32, stick: u32, axis: u32) -> Result<f32, InputError>;

    /// Check if a key is currently held down
    fn key_held(&self, code: u32) -> bool {
        self.try_key_held(code).unwrap_or(false)
    }

    /// Check if a key was pressed this frame
    fn key_down(&self, code: u32) -> bool {
        self.try_key_down(code).unwrap_or(false)
    }

    /// Check if a key was released this frame
    fn key_up(&self, code: u32) -> bool {
        self.try_key_up(code).unwrap_or(false)
    }

    /// Check if a mouse button is currently held down
    fn mouse_button_held(&self, code: u32) -> bool {
        self.try_mouse_button_held(code).unwrap_or(false)
    }

    /// Check if a mouse button was pressed this frame
    fn mouse_button_down(&self, code: u32) -> bool {
        self.try_mouse_button_down(code).unwrap_or(false)
    }

    /// Check if a mouse button was released this frame
    fn mouse_button_up(&self, code: u32) -> bool {
        self.try_mouse_button_up(code).unwrap_or(false)
    }

    /// Check if a button on the given controller is held down
    fn cont_button_held(&self, device: u32, code: u32) -> bool {
        self.try_cont_button_held(device, code).unwrap_or(false)
    }

    /// Check if a button on the given controller was pressed this frame
    fn cont_button_down(&self, device: u32, code: u32) -> bool {
        self.try_cont_button_down(device, code).unwrap_or(false)
    }

    /// Check if a button on the given controller was released this frame
    fn cont_button_up(&self, device: u32, code: u32) -> bool {
        self.try_cont_button_up(device, code).unwrap_or(false)
    }

    /// Value of one analogue axis, `0.0` for any invalid selector
    fn cont_analogue_axis(&self, device: u32, stick: u32, axis: u32) -> f32 {
        self.try_cont_analogue_axis(device, stick, axis).unwrap_or(0.0)
    }

    /// Both axes of one analogue stick as a vector
    fn cont_analogue_stick(&self, device: u32, stick: u32) -> Vec2 {
        Vec2::new(
            self.cont_analogue_axis(device, stick, 0),
            self.cont_analogue_axis(device, stick, 1),
        )
    }
}
