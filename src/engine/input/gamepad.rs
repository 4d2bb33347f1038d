// Controller backend using gilrs

use super::codes::controller_code;
use super::event::{EventSource, InputEvent};
use super::InputError;
use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Assigns stable device indices to backend gamepad ids.
/// New devices take the lowest free index.
#[derive(Debug)]
pub struct DeviceSlots<K> {
    assigned: HashMap<K, u32>,
    capacity: u32,
}

impl<K: Copy + Eq + Hash> DeviceSlots<K> {
    pub fn new(capacity: u32) -> Self {
        Self {
            assigned: HashMap::new(),
            capacity,
        }
    }

    /// Assign a slot to `id`, reusing its existing slot if it has one
    pub fn assign(&mut self, id: K) -> Option<u32> {
        if let Some(&slot) = self.assigned.get(&id) {
            return Some(slot);
        }

        let slot = (0..self.capacity).find(|slot| !self.assigned.values().any(|s| s == slot))?;
        self.assigned.insert(id, slot);
        Some(slot)
    }

    /// Free the slot held by `id`
    pub fn release(&mut self, id: K) -> Option<u32> {
        self.assigned.remove(&id)
    }

    pub fn get(&self, id: K) -> Option<u32> {
        self.assigned.get(&id).copied()
    }
}

/// Map a gilrs axis to its `(stick, axis)` selector
pub fn axis_selector(axis: Axis) -> Option<(u32, u32)> {
    match axis {
        Axis::LeftStickX => Some((0, 0)),
        Axis::LeftStickY => Some((0, 1)),
        Axis::RightStickX => Some((1, 0)),
        Axis::RightStickY => Some((1, 1)),
        _ => None,
    }
}

/// Build the event for a button change on a slotted device
pub fn button_event(device: u32, button: Button, pressed: bool) -> Option<InputEvent> {
    let code = controller_code(button)?;
    Some(if pressed {
        InputEvent::ControllerButtonPressed { device, code }
    } else {
        InputEvent::ControllerButtonReleased { device, code }
    })
}

/// Build the event for an axis change on a slotted device
pub fn axis_event(device: u32, axis: Axis, value: f32) -> Option<InputEvent> {
    let (stick, axis) = axis_selector(axis)?;
    Some(InputEvent::ControllerAxis {
        device,
        stick,
        axis,
        value,
    })
}

/// Event source reading every connected gamepad through gilrs
pub struct GamepadSource {
    gilrs: Gilrs,
    slots: DeviceSlots<GamepadId>,
    /// Connections found at startup, delivered on the first poll
    startup: Vec<InputEvent>,
}

impl GamepadSource {
    /// Open the gamepad backend with `max_controllers` device slots
    pub fn new(max_controllers: u32) -> Result<Self, InputError> {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => gilrs,
            Err(gilrs::Error::NotImplemented(dummy)) => {
                log::warn!("Gamepads are not supported on this platform");
                dummy
            }
            Err(e) => return Err(InputError::Backend(e.to_string())),
        };

        let mut slots = DeviceSlots::new(max_controllers);
        let mut startup = Vec::new();
        for (id, gamepad) in gilrs.gamepads() {
            match slots.assign(id) {
                Some(device) => {
                    log::info!("Found controller '{}' in slot {}", gamepad.name(), device);
                    startup.push(InputEvent::ControllerConnected { device });
                }
                None => log::warn!("No free slot for controller '{}'", gamepad.name()),
            }
        }

        Ok(Self {
            gilrs,
            slots,
            startup,
        })
    }

    fn translate(&mut self, id: GamepadId, event: EventType) -> Option<InputEvent> {
        match event {
            EventType::Connected => {
                let name = self.gilrs.gamepad(id).name().to_string();
                match self.slots.assign(id) {
                    Some(device) => {
                        log::info!("Controller '{}' connected in slot {}", name, device);
                        Some(InputEvent::ControllerConnected { device })
                    }
                    None => {
                        log::warn!("No free slot for controller '{}'", name);
                        None
                    }
                }
            }
            EventType::Disconnected => {
                let device = self.slots.release(id)?;
                log::info!("Controller in slot {} disconnected", device);
                Some(InputEvent::ControllerDisconnected { device })
            }
            EventType::ButtonPressed(button, _) => button_event(self.slots.get(id)?, button, true),
            EventType::ButtonReleased(button, _) => {
                button_event(self.slots.get(id)?, button, false)
            }
            EventType::AxisChanged(axis, value, _) => axis_event(self.slots.get(id)?, axis, value),
            _ => None,
        }
    }
}

impl EventSource for GamepadSource {
    fn name(&self) -> &str {
        "gilrs"
    }

    fn poll(&mut self, events: &mut VecDeque<InputEvent>) {
        events.extend(self.startup.drain(..));

        while let Some(event) = self.gilrs.next_event() {
            if let Some(translated) = self.translate(event.id, event.event) {
                events.push_back(translated);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::codes::controller;

    #[test]
    fn test_slots_assign_lowest_free() {
        let mut slots = DeviceSlots::new(4);
        assert_eq!(slots.assign(100usize), Some(0));
        assert_eq!(slots.assign(200), Some(1));
        assert_eq!(slots.assign(300), Some(2));

        assert_eq!(slots.release(100), Some(0));
        assert_eq!(slots.assign(400), Some(0));
        assert_eq!(slots.get(100), None);
        assert_eq!(slots.get(300), Some(2));
    }

    #[test]
    fn test_slots_reassign_same_id() {
        let mut slots = DeviceSlots::new(2);
        assert_eq!(slots.assign(7usize), Some(0));
        assert_eq!(slots.assign(7), Some(0));
        assert_eq!(slots.assign(8), Some(1));
    }

    #[test]
    fn test_slots_full() {
        let mut slots = DeviceSlots::new(1);
        assert_eq!(slots.assign(1usize), Some(0));
        assert_eq!(slots.assign(2), None);
        assert_eq!(slots.get(2), None);
    }

    #[test]
    fn test_release_unknown() {
        let mut slots: DeviceSlots<usize> = DeviceSlots::new(1);
        assert_eq!(slots.release(5), None);
        assert_eq!(slots.assign(5), Some(0));
    }

    #[test]
    fn test_axis_selectors() {
        assert_eq!(axis_selector(Axis::LeftStickX), Some((0, 0)));
        assert_eq!(axis_selector(Axis::LeftStickY), Some((0, 1)));
        assert_eq!(axis_selector(Axis::RightStickX), Some((1, 0)));
        assert_eq!(axis_selector(Axis::RightStickY), Some((1, 1)));
        assert_eq!(axis_selector(Axis::LeftZ), None);
    }

    #[test]
    fn test_button_events() {
        assert_eq!(
            button_event(2, Button::South, true),
            Some(InputEvent::ControllerButtonPressed {
                device: 2,
                code: controller::A
            })
        );
        assert_eq!(
            button_event(0, Button::DPadLeft, false),
            Some(InputEvent::ControllerButtonReleased {
                device: 0,
                code: controller::DPAD_LEFT
            })
        );
        assert_eq!(button_event(0, Button::Unknown, true), None);
    }

    #[test]
    fn test_axis_events() {
        assert_eq!(
            axis_event(1, Axis::RightStickY, -0.5),
            Some(InputEvent::ControllerAxis {
                device: 1,
                stick: 1,
                axis: 1,
                value: -0.5
            })
        );
        assert_eq!(axis_event(1, Axis::DPadX, 1.0), None);
    }
}
