// Input tuning configuration

use super::buffer::DEFAULT_BUFFER_SIZE;
use super::InputError;

/// Default radius of the analogue dead zone
pub const DEFAULT_DEAD_ZONE: f32 = 0.15;

/// Default number of controller slots
pub const DEFAULT_MAX_CONTROLLERS: usize = 4;

/// Tuning values for the input system
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// Analogue values with a magnitude below this read as zero.
    /// Must lie in `[0.0, 1.0)`.
    pub dead_zone: f32,

    /// Number of controller slots (device indices `0..max_controllers`)
    pub max_controllers: usize,

    /// Flip the sign of stick Y axes so that up reads negative
    pub invert_stick_y: bool,

    /// Release held keys and mouse buttons when the window loses focus
    pub release_on_focus_loss: bool,

    /// Deferred transitions each button table holds before collapsing them
    /// to net changes. Must be at least 1.
    pub max_deferred: usize,
}

impl InputConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            max_controllers: DEFAULT_MAX_CONTROLLERS,
            invert_stick_y: false,
            release_on_focus_loss: true,
            max_deferred: DEFAULT_BUFFER_SIZE,
        }
    }

    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    pub fn with_max_controllers(mut self, max_controllers: usize) -> Self {
        self.max_controllers = max_controllers;
        self
    }

    pub fn with_invert_stick_y(mut self, invert: bool) -> Self {
        self.invert_stick_y = invert;
        self
    }

    pub fn with_release_on_focus_loss(mut self, release: bool) -> Self {
        self.release_on_focus_loss = release;
        self
    }

    pub fn with_max_deferred(mut self, max_deferred: usize) -> Self {
        self.max_deferred = max_deferred;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), InputError> {
        if !(0.0..1.0).contains(&self.dead_zone) {
            return Err(InputError::InvalidConfig(format!(
                "dead zone must be in [0, 1), got {}",
                self.dead_zone
            )));
        }

        if self.max_controllers == 0 {
            return Err(InputError::InvalidConfig(
                "at least one controller slot is required".to_string(),
            ));
        }

        if u32::try_from(self.max_controllers).is_err() {
            return Err(InputError::InvalidConfig(format!(
                "too many controller slots: {}",
                self.max_controllers
            )));
        }

        if self.max_deferred == 0 {
            return Err(InputError::InvalidConfig(
                "deferred transition buffer needs room for at least one entry".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}
