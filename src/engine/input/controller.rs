// Controller device slots and per-device state

use super::buttons::ButtonStates;

/// Analogue sticks per controller (0 = left, 1 = right)
pub const STICK_COUNT: u32 = 2;

/// Axes per analogue stick (0 = X, 1 = Y)
pub const AXIS_COUNT: u32 = 2;

/// State of one connected controller
#[derive(Debug)]
pub struct ControllerState {
    buttons: ButtonStates,
    sticks: [[f32; AXIS_COUNT as usize]; STICK_COUNT as usize],
}

impl ControllerState {
    /// Create a controller with nothing pressed and both sticks centred
    pub fn new(max_deferred: usize) -> Self {
        Self {
            buttons: ButtonStates::new(max_deferred),
            sticks: [[0.0; AXIS_COUNT as usize]; STICK_COUNT as usize],
        }
    }

    /// Button state table for this controller
    pub fn buttons(&self) -> &ButtonStates {
        &self.buttons
    }

    pub(crate) fn buttons_mut(&mut self) -> &mut ButtonStates {
        &mut self.buttons
    }

    /// Current value of one stick axis, `None` if the selector is out of range
    pub fn axis(&self, stick: u32, axis: u32) -> Option<f32> {
        self.sticks
            .get(stick as usize)
            .and_then(|s| s.get(axis as usize))
            .copied()
    }

    /// Store a processed axis value. Returns false if the selector is out of range.
    pub(crate) fn set_axis(&mut self, stick: u32, axis: u32, value: f32) -> bool {
        match self
            .sticks
            .get_mut(stick as usize)
            .and_then(|s| s.get_mut(axis as usize))
        {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub(crate) fn begin_frame(&mut self) {
        self.buttons.begin_frame();
    }
}

/// Fixed set of controller slots indexed by device number.
///
/// A slot keeps its index for as long as the device stays connected;
/// a freed slot is reused by the next connection.
#[derive(Debug)]
pub struct ControllerSlots {
    slots: Vec<Option<ControllerState>>,
    max_deferred: usize,
}

impl ControllerSlots {
    /// Create `capacity` empty slots
    pub fn new(capacity: usize, max_deferred: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            max_deferred,
        }
    }

    /// Mark a slot as connected. Returns false if the slot does not exist.
    /// Reconnecting an occupied slot starts it from a clean state.
    pub(crate) fn connect(&mut self, device: u32) -> bool {
        match self.slots.get_mut(device as usize) {
            Some(slot) => {
                *slot = Some(ControllerState::new(self.max_deferred));
                true
            }
            None => false,
        }
    }

    /// Free a slot. Returns false if it was not connected.
    pub(crate) fn disconnect(&mut self, device: u32) -> bool {
        self.slots
            .get_mut(device as usize)
            .and_then(Option::take)
            .is_some()
    }

    /// State of a connected controller
    pub fn get(&self, device: u32) -> Option<&ControllerState> {
        self.slots.get(device as usize).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, device: u32) -> Option<&mut ControllerState> {
        self.slots.get_mut(device as usize).and_then(Option::as_mut)
    }

    /// Number of connected controllers
    pub fn connected_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn begin_frame(&mut self) {
        for controller in self.slots.iter_mut().flatten() {
            controller.begin_frame();
        }
    }
}
