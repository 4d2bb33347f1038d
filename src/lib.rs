// Frame-polled keyboard, mouse and controller input

pub mod core;
pub mod engine;

pub use engine::app::Application;
pub use engine::frame_clock::DeltaTime;
pub use engine::input::{Input, InputConfig, InputError, SharedInput};
