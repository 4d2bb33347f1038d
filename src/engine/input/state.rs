// Frame input state: keyboard, mouse and controllers

use super::buttons::ButtonStates;
use super::codes::CodeKind;
use super::config::InputConfig;
use super::controller::ControllerSlots;
use super::event::InputEvent;
use crate::core::math::{apply_dead_zone, clamp};

/// Everything the query surface reads, refreshed once per frame
#[derive(Debug)]
pub struct InputState {
    keys: ButtonStates,
    mouse_buttons: ButtonStates,
    mouse_pos: (i32, i32),
    controllers: ControllerSlots,
    config: InputConfig,
}

impl InputState {
    /// Create an empty state
    pub fn new(config: InputConfig) -> Self {
        Self {
            keys: ButtonStates::new(config.max_deferred),
            mouse_buttons: ButtonStates::new(config.max_deferred),
            mouse_pos: (0, 0),
            controllers: ControllerSlots::new(config.max_controllers, config.max_deferred),
            config,
        }
    }

    pub fn keys(&self) -> &ButtonStates {
        &self.keys
    }

    pub fn mouse_buttons(&self) -> &ButtonStates {
        &self.mouse_buttons
    }

    /// Cursor position in physical window pixels
    pub fn mouse_pos(&self) -> (i32, i32) {
        self.mouse_pos
    }

    pub fn controllers(&self) -> &ControllerSlots {
        &self.controllers
    }

    /// Start a new frame on every button table
    pub(crate) fn begin_frame(&mut self) {
        self.keys.begin_frame();
        self.mouse_buttons.begin_frame();
        self.controllers.begin_frame();
    }

    /// Apply one event to the current frame
    pub(crate) fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPressed(code) | InputEvent::KeyReleased(code)
                if !CodeKind::Key.contains(code) =>
            {
                log::trace!("Ignoring out-of-range key code {}", code);
            }
            InputEvent::KeyPressed(code) => self.keys.press(code),
            InputEvent::KeyReleased(code) => self.keys.release(code),

            InputEvent::MouseButtonPressed(code) | InputEvent::MouseButtonReleased(code)
                if !CodeKind::MouseButton.contains(code) =>
            {
                log::trace!("Ignoring out-of-range mouse code {}", code);
            }
            InputEvent::MouseButtonPressed(code) => self.mouse_buttons.press(code),
            InputEvent::MouseButtonReleased(code) => self.mouse_buttons.release(code),

            InputEvent::MouseMoved { x, y } => self.mouse_pos = (x, y),

            InputEvent::FocusLost => {
                if self.config.release_on_focus_loss {
                    log::debug!("Focus lost, releasing held keys and mouse buttons");
                    self.keys.release_all();
                    self.mouse_buttons.release_all();
                }
            }

            InputEvent::ControllerConnected { device } => {
                if self.controllers.connect(device) {
                    log::debug!("Controller {} connected", device);
                } else {
                    log::warn!(
                        "Controller {} connected outside the {} available slots",
                        device,
                        self.controllers.capacity()
                    );
                }
            }
            InputEvent::ControllerDisconnected { device } => {
                if self.controllers.disconnect(device) {
                    log::debug!("Controller {} disconnected", device);
                }
            }

            InputEvent::ControllerButtonPressed { code, .. }
            | InputEvent::ControllerButtonReleased { code, .. }
                if !CodeKind::ControllerButton.contains(code) =>
            {
                log::trace!("Ignoring out-of-range controller code {}", code);
            }
            InputEvent::ControllerButtonPressed { device, code } => {
                match self.controllers.get_mut(device) {
                    Some(controller) => controller.buttons_mut().press(code),
                    None => log::trace!("Button press for unknown controller {}", device),
                }
            }
            InputEvent::ControllerButtonReleased { device, code } => {
                match self.controllers.get_mut(device) {
                    Some(controller) => controller.buttons_mut().release(code),
                    None => log::trace!("Button release for unknown controller {}", device),
                }
            }

            InputEvent::ControllerAxis {
                device,
                stick,
                axis,
                value,
            } => self.apply_axis(device, stick, axis, value),
        }
    }

    fn apply_axis(&mut self, device: u32, stick: u32, axis: u32, raw: f32) {
        if !raw.is_finite() {
            log::trace!("Ignoring non-finite axis value on controller {}", device);
            return;
        }

        let mut value = apply_dead_zone(clamp(raw, -1.0, 1.0), self.config.dead_zone);
        if axis == 1 && self.config.invert_stick_y {
            value = -value;
        }

        let stored = self
            .controllers
            .get_mut(device)
            .map(|controller| controller.set_axis(stick, axis, value));

        match stored {
            Some(true) => {}
            Some(false) => log::trace!(
                "Ignoring axis selector ({}, {}) on controller {}",
                stick,
                axis,
                device
            ),
            None => log::trace!("Axis change for unknown controller {}", device),
        }
    }
}
