// Application driver - the only owner of the input frame lifecycle

use super::frame_clock::DeltaTime;
use super::input::gamepad::GamepadSource;
use super::input::manager::create_input;
use super::input::window::translate_window_event;
use super::input::{EventSource, InputConfig, InputSystem, SharedInput};
use anyhow::Result;
use std::rc::Rc;
use winit::event::WindowEvent;

/// Drives the input system once per frame and hands out read-only handles
pub struct Application {
    input: Rc<InputSystem>,
}

impl Application {
    /// Create the input system and attach the controller backend.
    /// A missing controller backend is not fatal.
    pub fn new(config: InputConfig) -> Result<Self> {
        let max_controllers = u32::try_from(config.max_controllers)?;
        let app = Self::without_controllers(config)?;

        match GamepadSource::new(max_controllers) {
            Ok(source) => app.input.add_source(Box::new(source)),
            Err(e) => log::warn!("Controller input unavailable: {}", e),
        }

        Ok(app)
    }

    /// Create the input system with keyboard and mouse input only
    pub fn without_controllers(config: InputConfig) -> Result<Self> {
        let input = create_input(config)?;
        Ok(Self { input })
    }

    /// Attach an extra event source
    pub fn add_source(&self, source: Box<dyn EventSource>) {
        self.input.add_source(source);
    }

    /// A shared, read-only handle to the input state
    pub fn input(&self) -> SharedInput {
        self.input.clone()
    }

    /// Forward a window event; it takes effect on the next frame
    pub fn handle_window_event(&self, event: &WindowEvent) {
        if let Some(input_event) = translate_window_event(event) {
            self.input.queue_event(input_event);
        }
    }

    /// Run the input lifecycle for one frame and return the frame delta
    pub fn frame(&self) -> DeltaTime {
        let delta = self.input.update_delta_time();
        self.input.process_events();
        delta
    }

    /// Averaged frames per second
    pub fn fps(&self) -> f32 {
        self.input.fps()
    }

    /// Number of frames run so far
    pub fn frame_count(&self) -> u64 {
        self.input.frame_count()
    }
}
