// Input handling system
//
// This module provides a frame-polled input system for keyboard, mouse and
// controller state. Game code reads a per-frame snapshot through the `Input`
// trait; only the application driver refreshes that snapshot.
//
// ## Architecture
//
// - `codes`: Numeric code tables for keys, mouse buttons and controller buttons
// - `event`: Platform-neutral input events and the `EventSource` trait
// - `buffer`: Deferred transitions for elements that change twice in one frame
// - `buttons`: Held / down / up tracking for one table of buttons
// - `controller`: Controller device slots and analogue sticks
// - `state`: The full frame snapshot
// - `config`: Input tuning values
// - `query`: The read-only `Input` trait
// - `manager`: `InputSystem`, the shared implementation behind `Input`
// - `window`: winit window event translation
// - `gamepad`: gilrs controller backend
//
// ## Usage Example
//
// ```rust
// use rusted_input::engine::app::Application;
// use rusted_input::engine::input::{codes::key, Input, InputConfig};
//
// let app = Application::new(InputConfig::default())?;
// let input = app.input();
//
// // In your event loop, forward window events
// app.handle_window_event(&event);
//
// // Once per frame, before game logic
// let dt = app.frame();
//
// if input.key_down(key::SPACE) {
//     // Space was pressed this frame
// }
// let (x, y) = input.mouse_pos();
// ```

pub mod buffer;
pub mod buttons;
pub mod codes;
pub mod config;
pub mod controller;
pub mod event;
pub mod gamepad;
pub mod manager;
pub mod query;
pub mod state;
pub mod window;

use codes::CodeKind;

// Re-export commonly used types
pub use config::InputConfig;
pub use event::{EventSource, InputEvent};
pub use manager::{InputSystem, SharedInput};
pub use query::Input;

/// Input errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid device index: {device}")]
    InvalidDeviceIndex { device: u32 },

    #[error("Invalid {kind} code: {code}")]
    InvalidCode { kind: CodeKind, code: u32 },

    #[error("Invalid analogue selector: stick {stick}, axis {axis}")]
    InvalidAxisSelector { stick: u32, axis: u32 },

    #[error("Invalid input configuration: {0}")]
    InvalidConfig(String),

    #[error("Input backend error: {0}")]
    Backend(String),
}
