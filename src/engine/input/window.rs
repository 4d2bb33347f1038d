// winit window event translation

use super::codes::{key_code, mouse_code};
use super::event::InputEvent;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Translate a winit window event into an input event, if it is one
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            translate_key(event.physical_key, event.state, event.repeat)
        }
        WindowEvent::MouseInput { state, button, .. } => translate_mouse_button(*button, *state),
        WindowEvent::CursorMoved { position, .. } => Some(translate_cursor(position.x, position.y)),
        WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
        _ => None,
    }
}

/// Translate a physical key change. OS key repeats are dropped.
pub fn translate_key(
    physical_key: PhysicalKey,
    state: ElementState,
    repeat: bool,
) -> Option<InputEvent> {
    // Only process physical key codes
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let Some(mapped) = key_code(code) else {
        log::trace!("No key code for {:?}", code);
        return None;
    };

    match state {
        ElementState::Pressed if repeat => None,
        ElementState::Pressed => Some(InputEvent::KeyPressed(mapped)),
        ElementState::Released => Some(InputEvent::KeyReleased(mapped)),
    }
}

/// Translate a mouse button change
pub fn translate_mouse_button(button: MouseButton, state: ElementState) -> Option<InputEvent> {
    let Some(mapped) = mouse_code(button) else {
        log::trace!("No mouse code for {:?}", button);
        return None;
    };

    Some(match state {
        ElementState::Pressed => InputEvent::MouseButtonPressed(mapped),
        ElementState::Released => InputEvent::MouseButtonReleased(mapped),
    })
}

/// Translate a cursor position in physical pixels, rounding to integers
pub fn translate_cursor(x: f64, y: f64) -> InputEvent {
    InputEvent::MouseMoved {
        x: x.round() as i32,
        y: y.round() as i32,
    }
}
