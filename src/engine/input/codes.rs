// Numeric code tables for keys, mouse buttons and controller buttons
//
// Queries on the `Input` trait take plain `u32` codes. The constants here
// define those code spaces and the functions map platform types onto them.

use gilrs::Button;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Size of the keyboard code space. Valid key codes are `0..KEY_CODE_COUNT`.
pub const KEY_CODE_COUNT: u32 = 256;

/// Size of the mouse button code space.
pub const MOUSE_CODE_COUNT: u32 = 32;

/// Size of the controller button code space.
pub const CONTROLLER_CODE_COUNT: u32 = 32;

/// The kind of element a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Key,
    MouseButton,
    ControllerButton,
}

impl CodeKind {
    /// Number of valid codes for this kind
    pub fn code_count(&self) -> u32 {
        match self {
            CodeKind::Key => KEY_CODE_COUNT,
            CodeKind::MouseButton => MOUSE_CODE_COUNT,
            CodeKind::ControllerButton => CONTROLLER_CODE_COUNT,
        }
    }

    /// Check whether `code` lies inside this code space
    pub fn contains(&self, code: u32) -> bool {
        code < self.code_count()
    }
}

impl std::fmt::Display for CodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CodeKind::Key => "key",
            CodeKind::MouseButton => "mouse button",
            CodeKind::ControllerButton => "controller button",
        };
        f.write_str(name)
    }
}

/// Keyboard codes (USB HID keyboard usage IDs)
pub mod key {
    pub const A: u32 = 0x04;
    pub const B: u32 = 0x05;
    pub const C: u32 = 0x06;
    pub const D: u32 = 0x07;
    pub const E: u32 = 0x08;
    pub const F: u32 = 0x09;
    pub const G: u32 = 0x0A;
    pub const H: u32 = 0x0B;
    pub const I: u32 = 0x0C;
    pub const J: u32 = 0x0D;
    pub const K: u32 = 0x0E;
    pub const L: u32 = 0x0F;
    pub const M: u32 = 0x10;
    pub const N: u32 = 0x11;
    pub const O: u32 = 0x12;
    pub const P: u32 = 0x13;
    pub const Q: u32 = 0x14;
    pub const R: u32 = 0x15;
    pub const S: u32 = 0x16;
    pub const T: u32 = 0x17;
    pub const U: u32 = 0x18;
    pub const V: u32 = 0x19;
    pub const W: u32 = 0x1A;
    pub const X: u32 = 0x1B;
    pub const Y: u32 = 0x1C;
    pub const Z: u32 = 0x1D;

    pub const DIGIT_1: u32 = 0x1E;
    pub const DIGIT_2: u32 = 0x1F;
    pub const DIGIT_3: u32 = 0x20;
    pub const DIGIT_4: u32 = 0x21;
    pub const DIGIT_5: u32 = 0x22;
    pub const DIGIT_6: u32 = 0x23;
    pub const DIGIT_7: u32 = 0x24;
    pub const DIGIT_8: u32 = 0x25;
    pub const DIGIT_9: u32 = 0x26;
    pub const DIGIT_0: u32 = 0x27;

    pub const ENTER: u32 = 0x28;
    pub const ESCAPE: u32 = 0x29;
    pub const BACKSPACE: u32 = 0x2A;
    pub const TAB: u32 = 0x2B;
    pub const SPACE: u32 = 0x2C;
    pub const MINUS: u32 = 0x2D;
    pub const EQUAL: u32 = 0x2E;
    pub const BRACKET_LEFT: u32 = 0x2F;
    pub const BRACKET_RIGHT: u32 = 0x30;
    pub const BACKSLASH: u32 = 0x31;
    pub const SEMICOLON: u32 = 0x33;
    pub const QUOTE: u32 = 0x34;
    pub const BACKQUOTE: u32 = 0x35;
    pub const COMMA: u32 = 0x36;
    pub const PERIOD: u32 = 0x37;
    pub const SLASH: u32 = 0x38;
    pub const CAPS_LOCK: u32 = 0x39;

    pub const F1: u32 = 0x3A;
    pub const F2: u32 = 0x3B;
    pub const F3: u32 = 0x3C;
    pub const F4: u32 = 0x3D;
    pub const F5: u32 = 0x3E;
    pub const F6: u32 = 0x3F;
    pub const F7: u32 = 0x40;
    pub const F8: u32 = 0x41;
    pub const F9: u32 = 0x42;
    pub const F10: u32 = 0x43;
    pub const F11: u32 = 0x44;
    pub const F12: u32 = 0x45;

    pub const PRINT_SCREEN: u32 = 0x46;
    pub const SCROLL_LOCK: u32 = 0x47;
    pub const PAUSE: u32 = 0x48;
    pub const INSERT: u32 = 0x49;
    pub const HOME: u32 = 0x4A;
    pub const PAGE_UP: u32 = 0x4B;
    pub const DELETE: u32 = 0x4C;
    pub const END: u32 = 0x4D;
    pub const PAGE_DOWN: u32 = 0x4E;
    pub const ARROW_RIGHT: u32 = 0x4F;
    pub const ARROW_LEFT: u32 = 0x50;
    pub const ARROW_DOWN: u32 = 0x51;
    pub const ARROW_UP: u32 = 0x52;
    pub const NUM_LOCK: u32 = 0x53;

    pub const CONTROL_LEFT: u32 = 0xE0;
    pub const SHIFT_LEFT: u32 = 0xE1;
    pub const ALT_LEFT: u32 = 0xE2;
    pub const SUPER_LEFT: u32 = 0xE3;
    pub const CONTROL_RIGHT: u32 = 0xE4;
    pub const SHIFT_RIGHT: u32 = 0xE5;
    pub const ALT_RIGHT: u32 = 0xE6;
    pub const SUPER_RIGHT: u32 = 0xE7;
}

/// Mouse button codes
pub mod mouse {
    pub const LEFT: u32 = 1;
    pub const MIDDLE: u32 = 2;
    pub const RIGHT: u32 = 3;
    pub const BACK: u32 = 4;
    pub const FORWARD: u32 = 5;
    /// First code used for `MouseButton::Other(n)`, which maps to `OTHER_BASE + n`
    pub const OTHER_BASE: u32 = 6;
}

/// Controller button codes
pub mod controller {
    pub const A: u32 = 0;
    pub const B: u32 = 1;
    pub const X: u32 = 2;
    pub const Y: u32 = 3;
    pub const BACK: u32 = 4;
    pub const GUIDE: u32 = 5;
    pub const START: u32 = 6;
    pub const LEFT_STICK: u32 = 7;
    pub const RIGHT_STICK: u32 = 8;
    pub const LEFT_SHOULDER: u32 = 9;
    pub const RIGHT_SHOULDER: u32 = 10;
    pub const DPAD_UP: u32 = 11;
    pub const DPAD_DOWN: u32 = 12;
    pub const DPAD_LEFT: u32 = 13;
    pub const DPAD_RIGHT: u32 = 14;
    pub const LEFT_TRIGGER: u32 = 15;
    pub const RIGHT_TRIGGER: u32 = 16;
    pub const C: u32 = 17;
    pub const Z: u32 = 18;
}

/// Map a winit physical key to its key code
pub fn key_code(code: KeyCode) -> Option<u32> {
    let mapped = match code {
        KeyCode::KeyA => key::A,
        KeyCode::KeyB => key::B,
        KeyCode::KeyC => key::C,
        KeyCode::KeyD => key::D,
        KeyCode::KeyE => key::E,
        KeyCode::KeyF => key::F,
        KeyCode::KeyG => key::G,
        KeyCode::KeyH => key::H,
        KeyCode::KeyI => key::I,
        KeyCode::KeyJ => key::J,
        KeyCode::KeyK => key::K,
        KeyCode::KeyL => key::L,
        KeyCode::KeyM => key::M,
        KeyCode::KeyN => key::N,
        KeyCode::KeyO => key::O,
        KeyCode::KeyP => key::P,
        KeyCode::KeyQ => key::Q,
        KeyCode::KeyR => key::R,
        KeyCode::KeyS => key::S,
        KeyCode::KeyT => key::T,
        KeyCode::KeyU => key::U,
        KeyCode::KeyV => key::V,
        KeyCode::KeyW => key::W,
        KeyCode::KeyX => key::X,
        KeyCode::KeyY => key::Y,
        KeyCode::KeyZ => key::Z,
        KeyCode::Digit1 => key::DIGIT_1,
        KeyCode::Digit2 => key::DIGIT_2,
        KeyCode::Digit3 => key::DIGIT_3,
        KeyCode::Digit4 => key::DIGIT_4,
        KeyCode::Digit5 => key::DIGIT_5,
        KeyCode::Digit6 => key::DIGIT_6,
        KeyCode::Digit7 => key::DIGIT_7,
        KeyCode::Digit8 => key::DIGIT_8,
        KeyCode::Digit9 => key::DIGIT_9,
        KeyCode::Digit0 => key::DIGIT_0,
        KeyCode::Enter => key::ENTER,
        KeyCode::Escape => key::ESCAPE,
        KeyCode::Backspace => key::BACKSPACE,
        KeyCode::Tab => key::TAB,
        KeyCode::Space => key::SPACE,
        KeyCode::Minus => key::MINUS,
        KeyCode::Equal => key::EQUAL,
        KeyCode::BracketLeft => key::BRACKET_LEFT,
        KeyCode::BracketRight => key::BRACKET_RIGHT,
        KeyCode::Backslash => key::BACKSLASH,
        KeyCode::Semicolon => key::SEMICOLON,
        KeyCode::Quote => key::QUOTE,
        KeyCode::Backquote => key::BACKQUOTE,
        KeyCode::Comma => key::COMMA,
        KeyCode::Period => key::PERIOD,
        KeyCode::Slash => key::SLASH,
        KeyCode::CapsLock => key::CAPS_LOCK,
        KeyCode::F1 => key::F1,
        KeyCode::F2 => key::F2,
        KeyCode::F3 => key::F3,
        KeyCode::F4 => key::F4,
        KeyCode::F5 => key::F5,
        KeyCode::F6 => key::F6,
        KeyCode::F7 => key::F7,
        KeyCode::F8 => key::F8,
        KeyCode::F9 => key::F9,
        KeyCode::F10 => key::F10,
        KeyCode::F11 => key::F11,
        KeyCode::F12 => key::F12,
        KeyCode::PrintScreen => key::PRINT_SCREEN,
        KeyCode::ScrollLock => key::SCROLL_LOCK,
        KeyCode::Pause => key::PAUSE,
        KeyCode::Insert => key::INSERT,
        KeyCode::Home => key::HOME,
        KeyCode::PageUp => key::PAGE_UP,
        KeyCode::Delete => key::DELETE,
        KeyCode::End => key::END,
        KeyCode::PageDown => key::PAGE_DOWN,
        KeyCode::ArrowRight => key::ARROW_RIGHT,
        KeyCode::ArrowLeft => key::ARROW_LEFT,
        KeyCode::ArrowDown => key::ARROW_DOWN,
        KeyCode::ArrowUp => key::ARROW_UP,
        KeyCode::NumLock => key::NUM_LOCK,
        KeyCode::ControlLeft => key::CONTROL_LEFT,
        KeyCode::ShiftLeft => key::SHIFT_LEFT,
        KeyCode::AltLeft => key::ALT_LEFT,
        KeyCode::SuperLeft => key::SUPER_LEFT,
        KeyCode::ControlRight => key::CONTROL_RIGHT,
        KeyCode::ShiftRight => key::SHIFT_RIGHT,
        KeyCode::AltRight => key::ALT_RIGHT,
        KeyCode::SuperRight => key::SUPER_RIGHT,
        _ => return None,
    };
    Some(mapped)
}

/// Map a winit mouse button to its mouse code
pub fn mouse_code(button: MouseButton) -> Option<u32> {
    match button {
        MouseButton::Left => Some(mouse::LEFT),
        MouseButton::Middle => Some(mouse::MIDDLE),
        MouseButton::Right => Some(mouse::RIGHT),
        MouseButton::Back => Some(mouse::BACK),
        MouseButton::Forward => Some(mouse::FORWARD),
        MouseButton::Other(n) => {
            let code = mouse::OTHER_BASE + n as u32;
            CodeKind::MouseButton.contains(code).then_some(code)
        }
    }
}

/// Map a gilrs button to its controller code
pub fn controller_code(button: Button) -> Option<u32> {
    let mapped = match button {
        Button::South => controller::A,
        Button::East => controller::B,
        Button::West => controller::X,
        Button::North => controller::Y,
        Button::Select => controller::BACK,
        Button::Mode => controller::GUIDE,
        Button::Start => controller::START,
        Button::LeftThumb => controller::LEFT_STICK,
        Button::RightThumb => controller::RIGHT_STICK,
        Button::LeftTrigger => controller::LEFT_SHOULDER,
        Button::RightTrigger => controller::RIGHT_SHOULDER,
        Button::DPadUp => controller::DPAD_UP,
        Button::DPadDown => controller::DPAD_DOWN,
        Button::DPadLeft => controller::DPAD_LEFT,
        Button::DPadRight => controller::DPAD_RIGHT,
        Button::LeftTrigger2 => controller::LEFT_TRIGGER,
        Button::RightTrigger2 => controller::RIGHT_TRIGGER,
        Button::C => controller::C,
        Button::Z => controller::Z,
        _ => return None,
    };
    Some(mapped)
}
