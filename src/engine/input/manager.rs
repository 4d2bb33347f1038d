// Input system - owns the frame state and implements the query surface

use super::codes::CodeKind;
use super::config::InputConfig;
use super::controller::{ControllerState, AXIS_COUNT, STICK_COUNT};
use super::event::{EventSource, InputEvent};
use super::query::Input;
use super::state::InputState;
use super::InputError;
use crate::engine::frame_clock::{DeltaTime, FrameClock};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Shared, read-only handle to the input system
pub type SharedInput = Rc<dyn Input>;

/// Build an input system behind a shared handle.
///
/// Only the application driver creates the system, since it is the only
/// caller allowed to run the frame lifecycle on it.
pub(crate) fn create_input(config: InputConfig) -> Result<Rc<InputSystem>, InputError> {
    config.validate()?;
    log::info!(
        "Input system created ({} controller slots, dead zone {})",
        config.max_controllers,
        config.dead_zone
    );
    Ok(Rc::new(InputSystem::new(config)))
}

/// Concrete input system.
///
/// State lives behind `RefCell`s so the system can be shared through `Rc`
/// while the driver refreshes it once per frame. Queries only take shared
/// borrows and never overlap with a refresh on the single engine thread.
pub struct InputSystem {
    /// Snapshot read by queries
    state: RefCell<InputState>,

    /// Events waiting for the next refresh
    pending: RefCell<VecDeque<InputEvent>>,

    /// Backends polled at each refresh
    sources: RefCell<Vec<Box<dyn EventSource>>>,

    /// Frame timing
    clock: RefCell<FrameClock>,
}

impl InputSystem {
    fn new(config: InputConfig) -> Self {
        Self {
            state: RefCell::new(InputState::new(config)),
            pending: RefCell::new(VecDeque::new()),
            sources: RefCell::new(Vec::new()),
            clock: RefCell::new(FrameClock::new()),
        }
    }

    /// Attach a backend polled on every refresh
    pub(crate) fn add_source(&self, source: Box<dyn EventSource>) {
        log::info!("Attached input source '{}'", source.name());
        self.sources.borrow_mut().push(source);
    }

    /// Queue an event for the next refresh
    pub(crate) fn queue_event(&self, event: InputEvent) {
        self.pending.borrow_mut().push_back(event);
    }

    /// Pull pending events from every source and apply them as a new frame.
    /// Call once per frame before any query.
    pub(crate) fn process_events(&self) {
        let mut pending = self.pending.borrow_mut();
        for source in self.sources.borrow_mut().iter_mut() {
            source.poll(&mut pending);
        }

        let mut state = self.state.borrow_mut();
        state.begin_frame();

        let count = pending.len();
        for event in pending.drain(..) {
            state.apply(event);
        }

        if count > 0 {
            log::trace!("Applied {} input events", count);
        }
    }

    /// Advance the frame clock and return the time since the previous frame
    pub(crate) fn update_delta_time(&self) -> DeltaTime {
        self.clock.borrow_mut().tick()
    }

    /// Averaged frames per second
    pub fn fps(&self) -> f32 {
        self.clock.borrow().fps()
    }

    /// Number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.clock.borrow().frame_count()
    }

    fn check_code(kind: CodeKind, code: u32) -> Result<(), InputError> {
        if kind.contains(code) {
            Ok(())
        } else {
            Err(InputError::InvalidCode { kind, code })
        }
    }

    fn with_controller<T>(
        &self,
        device: u32,
        f: impl FnOnce(&ControllerState) -> T,
    ) -> Result<T, InputError> {
        let state = self.state.borrow();
        state
            .controllers()
            .get(device)
            .map(f)
            .ok_or(InputError::InvalidDeviceIndex { device })
    }

    fn controller_button(
        &self,
        device: u32,
        code: u32,
        f: impl FnOnce(&ControllerState, u32) -> bool,
    ) -> Result<bool, InputError> {
        self.with_controller(device, |controller| {
            Self::check_code(CodeKind::ControllerButton, code).map(|()| f(controller, code))
        })?
    }
}

impl Input for InputSystem {
    fn num_controllers(&self) -> usize {
        self.state.borrow().controllers().connected_count()
    }

    fn is_controller_connected(&self, device: u32) -> bool {
        self.state.borrow().controllers().get(device).is_some()
    }

    fn mouse_pos(&self) -> (i32, i32) {
        self.state.borrow().mouse_pos()
    }

    fn try_key_held(&self, code: u32) -> Result<bool, InputError> {
        Self::check_code(CodeKind::Key, code)?;
        Ok(self.state.borrow().keys().is_held(code))
    }

    fn try_key_down(&self, code: u32) -> Result<bool, InputError> {
        Self::check_code(CodeKind::Key, code)?;
        Ok(self.state.borrow().keys().is_down(code))
    }

    fn try_key_up(&self, code: u32) -> Result<bool, InputError> {
        Self::check_code(CodeKind::Key, code)?;
        Ok(self.state.borrow().keys().is_up(code))
    }

    fn try_mouse_button_held(&self, code: u32) -> Result<bool, InputError> {
        Self::check_code(CodeKind::MouseButton, code)?;
        Ok(self.state.borrow().mouse_buttons().is_held(code))
    }

    fn try_mouse_button_down(&self, code: u32) -> Result<bool, InputError> {
        Self::check_code(CodeKind::MouseButton, code)?;
        Ok(self.state.borrow().mouse_buttons().is_down(code))
    }

    fn try_mouse_button_up(&self, code: u32) -> Result<bool, InputError> {
        Self::check_code(CodeKind::MouseButton, code)?;
        Ok(self.state.borrow().mouse_buttons().is_up(code))
    }

    fn try_cont_button_held(&self, device: u32, code: u32) -> Result<bool, InputError> {
        self.controller_button(device, code, |c, code| c.buttons().is_held(code))
    }

    fn try_cont_button_down(&self, device: u32, code: u32) -> Result<bool, InputError> {
        self.controller_button(device, code, |c, code| c.buttons().is_down(code))
    }

    fn try_cont_button_up(&self, device: u32, code: u32) -> Result<bool, InputError> {
        self.controller_button(device, code, |c, code| c.buttons().is_up(code))
    }

    fn try_cont_analogue_axis(
        &self,
        device: u32,
        stick: u32,
        axis: u32,
    ) -> Result<f32, InputError> {
        self.with_controller(device, |controller| {
            if stick >= STICK_COUNT || axis >= AXIS_COUNT {
                return Err(InputError::InvalidAxisSelector { stick, axis });
            }
            Ok(controller.axis(stick, axis).unwrap_or(0.0))
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::codes::{controller, key, mouse};
    use crate::engine::input::event::ScriptedSource;
    use approx::assert_relative_eq;

    fn system() -> Rc<InputSystem> {
        create_input(InputConfig::default()).unwrap()
    }

    /// Run one frame with the given events queued beforehand
    fn frame(system: &InputSystem, events: &[InputEvent]) {
        for event in events {
            system.queue_event(*event);
        }
        system.process_events();
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let result = create_input(InputConfig::default().with_dead_zone(2.0));
        assert!(matches!(result, Err(InputError::InvalidConfig(_))));
    }

    #[test]
    fn test_create_rejects_empty_deferral_buffer() {
        let result = create_input(InputConfig::default().with_max_deferred(0));
        assert!(matches!(result, Err(InputError::InvalidConfig(_))));
    }

    #[test]
    fn test_burst_of_taps_leaves_nothing_held() {
        let system = create_input(InputConfig::default().with_max_deferred(1)).unwrap();
        frame(
            &system,
            &[
                InputEvent::KeyPressed(key::A),
                InputEvent::KeyReleased(key::A),
                InputEvent::KeyPressed(key::B),
                InputEvent::KeyReleased(key::B),
                InputEvent::KeyPressed(key::C),
                InputEvent::KeyReleased(key::C),
            ],
        );
        for _ in 0..5 {
            frame(&system, &[]);
        }

        assert!(!system.key_held(key::A));
        assert!(!system.key_held(key::B));
        assert!(!system.key_held(key::C));
    }

    #[test]
    fn test_key_press_hold_release_over_three_frames() {
        let system = system();
        let mut down = Vec::new();
        let mut held = Vec::new();
        let mut up = Vec::new();

        let frames = [
            vec![InputEvent::KeyPressed(key::SPACE)],
            vec![],
            vec![InputEvent::KeyReleased(key::SPACE)],
        ];
        for events in &frames {
            frame(&system, events);
            down.push(system.key_down(key::SPACE));
            held.push(system.key_held(key::SPACE));
            up.push(system.key_up(key::SPACE));
        }

        assert_eq!(down, vec![true, false, false]);
        assert_eq!(held, vec![true, true, false]);
        assert_eq!(up, vec![false, false, true]);
    }

    #[test]
    fn test_down_and_up_never_coincide() {
        let system = system();
        let frames = [
            vec![
                InputEvent::KeyPressed(key::A),
                InputEvent::KeyReleased(key::A),
                InputEvent::MouseButtonPressed(mouse::LEFT),
                InputEvent::MouseButtonReleased(mouse::LEFT),
                InputEvent::KeyPressed(key::A),
            ],
            vec![InputEvent::KeyReleased(key::A)],
            vec![],
            vec![],
            vec![],
        ];

        let mut saw_key_up = false;
        for events in &frames {
            frame(&system, events);
            assert!(!(system.key_down(key::A) && system.key_up(key::A)));
            assert!(
                !(system.mouse_button_down(mouse::LEFT) && system.mouse_button_up(mouse::LEFT))
            );
            saw_key_up |= system.key_up(key::A);
        }

        assert!(saw_key_up);
        assert!(!system.key_held(key::A));
        assert!(!system.mouse_button_held(mouse::LEFT));
    }

    #[test]
    fn test_held_spans_down_frame_to_before_up_frame() {
        let system = system();
        frame(&system, &[InputEvent::KeyPressed(key::D)]);
        assert!(system.key_down(key::D) && system.key_held(key::D));

        for _ in 0..5 {
            frame(&system, &[]);
            assert!(system.key_held(key::D));
            assert!(!system.key_down(key::D));
        }

        frame(&system, &[InputEvent::KeyReleased(key::D)]);
        assert!(system.key_up(key::D));
        assert!(!system.key_held(key::D));
    }

    #[test]
    fn test_mouse_buttons_and_position() {
        let system = system();
        frame(
            &system,
            &[
                InputEvent::MouseMoved { x: 10, y: 20 },
                InputEvent::MouseButtonPressed(mouse::RIGHT),
                InputEvent::MouseMoved { x: 640, y: 360 },
            ],
        );

        assert!(system.mouse_button_down(mouse::RIGHT));
        assert!(system.mouse_button_held(mouse::RIGHT));
        assert_eq!(system.mouse_pos(), (640, 360));

        frame(&system, &[InputEvent::MouseButtonReleased(mouse::RIGHT)]);
        assert!(system.mouse_button_up(mouse::RIGHT));
        assert_eq!(system.mouse_pos(), (640, 360));
    }

    #[test]
    fn test_num_controllers_tracks_connections() {
        let system = system();
        assert_eq!(system.num_controllers(), 0);

        frame(
            &system,
            &[
                InputEvent::ControllerConnected { device: 0 },
                InputEvent::ControllerConnected { device: 1 },
            ],
        );
        assert_eq!(system.num_controllers(), 2);
        assert!(system.is_controller_connected(1));

        frame(&system, &[InputEvent::ControllerDisconnected { device: 0 }]);
        assert_eq!(system.num_controllers(), 1);
        assert!(!system.is_controller_connected(0));
    }

    #[test]
    fn test_controller_buttons() {
        let system = system();
        frame(
            &system,
            &[
                InputEvent::ControllerConnected { device: 0 },
                InputEvent::ControllerButtonPressed {
                    device: 0,
                    code: controller::START,
                },
            ],
        );
        assert!(system.cont_button_down(0, controller::START));
        assert!(system.cont_button_held(0, controller::START));
        assert!(!system.cont_button_held(1, controller::START));

        frame(&system, &[]);
        assert!(!system.cont_button_down(0, controller::START));
        assert!(system.cont_button_held(0, controller::START));

        frame(
            &system,
            &[InputEvent::ControllerButtonReleased {
                device: 0,
                code: controller::START,
            }],
        );
        assert!(system.cont_button_up(0, controller::START));
        assert!(!system.cont_button_held(0, controller::START));
    }

    #[test]
    fn test_analogue_axis_and_stick() {
        let system = create_input(InputConfig::default().with_dead_zone(0.0)).unwrap();
        frame(
            &system,
            &[
                InputEvent::ControllerConnected { device: 0 },
                InputEvent::ControllerAxis {
                    device: 0,
                    stick: 1,
                    axis: 0,
                    value: 0.25,
                },
                InputEvent::ControllerAxis {
                    device: 0,
                    stick: 1,
                    axis: 1,
                    value: -0.75,
                },
            ],
        );

        assert_relative_eq!(system.cont_analogue_axis(0, 1, 0), 0.25, epsilon = 0.0001);
        assert_relative_eq!(system.cont_analogue_axis(0, 1, 1), -0.75, epsilon = 0.0001);
        assert_eq!(system.cont_analogue_axis(0, 0, 0), 0.0);

        let stick = system.cont_analogue_stick(0, 1);
        assert_relative_eq!(stick.x, 0.25, epsilon = 0.0001);
        assert_relative_eq!(stick.y, -0.75, epsilon = 0.0001);
    }

    #[test]
    fn test_invalid_axis_selector_defaults_to_zero() {
        let system = system();
        frame(&system, &[InputEvent::ControllerConnected { device: 0 }]);

        assert_eq!(system.cont_analogue_axis(0, 2, 0), 0.0);
        assert_eq!(system.cont_analogue_axis(0, 0, 2), 0.0);
        assert_eq!(
            system.try_cont_analogue_axis(0, 2, 0),
            Err(InputError::InvalidAxisSelector { stick: 2, axis: 0 })
        );
        assert_eq!(
            system.try_cont_analogue_axis(0, 0, 7),
            Err(InputError::InvalidAxisSelector { stick: 0, axis: 7 })
        );
    }

    #[test]
    fn test_invalid_device_index() {
        let system = system();
        assert!(!system.cont_button_held(9, controller::A));
        assert_eq!(system.cont_analogue_axis(9, 0, 0), 0.0);
        assert_eq!(
            system.try_cont_button_down(9, controller::A),
            Err(InputError::InvalidDeviceIndex { device: 9 })
        );
        // Device is checked before the selector
        assert_eq!(
            system.try_cont_analogue_axis(9, 5, 5),
            Err(InputError::InvalidDeviceIndex { device: 9 })
        );
    }

    #[test]
    fn test_invalid_codes() {
        let system = system();
        frame(&system, &[InputEvent::ControllerConnected { device: 0 }]);

        assert!(!system.key_held(u32::MAX));
        assert_eq!(
            system.try_key_held(u32::MAX),
            Err(InputError::InvalidCode {
                kind: CodeKind::Key,
                code: u32::MAX
            })
        );
        assert!(matches!(
            system.try_mouse_button_up(500),
            Err(InputError::InvalidCode {
                kind: CodeKind::MouseButton,
                ..
            })
        ));
        assert!(matches!(
            system.try_cont_button_held(0, 500),
            Err(InputError::InvalidCode {
                kind: CodeKind::ControllerButton,
                ..
            })
        ));
        assert_eq!(system.try_key_held(key::A), Ok(false));
    }

    #[test]
    fn test_sources_are_polled_each_frame() {
        let system = system();
        let mut source = ScriptedSource::new();
        source.push_frame(vec![InputEvent::KeyPressed(key::ENTER)]);
        source.push_frame(vec![InputEvent::KeyReleased(key::ENTER)]);
        system.add_source(Box::new(source));

        system.process_events();
        assert!(system.key_down(key::ENTER));

        system.process_events();
        assert!(system.key_up(key::ENTER));
        assert!(!system.key_held(key::ENTER));
    }

    #[test]
    fn test_queries_do_not_change_state() {
        let system = system();
        frame(&system, &[InputEvent::KeyPressed(key::Q)]);

        for _ in 0..3 {
            assert!(system.key_down(key::Q));
            assert!(system.key_held(key::Q));
        }
        assert!(!system.key_held(key::E));
    }

    #[test]
    fn test_shared_handle_sees_refresh() {
        let system = system();
        let shared: SharedInput = system.clone();
        let other = Rc::clone(&shared);

        frame(&system, &[InputEvent::KeyPressed(key::W)]);
        assert!(shared.key_down(key::W));
        assert!(other.key_held(key::W));
        assert_eq!(Rc::strong_count(&system), 3);
    }

    #[test]
    fn test_update_delta_time() {
        let system = system();
        assert_eq!(system.update_delta_time(), DeltaTime::ZERO);
        system.update_delta_time();
        assert_eq!(system.frame_count(), 2);
    }
}
