// Platform-neutral input events

use std::collections::VecDeque;

/// A single input event, already translated into engine codes.
///
/// Window and controller backends produce these; the input system drains
/// them once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(u32),
    KeyReleased(u32),
    MouseButtonPressed(u32),
    MouseButtonReleased(u32),
    MouseMoved { x: i32, y: i32 },
    /// The window lost keyboard focus
    FocusLost,
    ControllerConnected { device: u32 },
    ControllerDisconnected { device: u32 },
    ControllerButtonPressed { device: u32, code: u32 },
    ControllerButtonReleased { device: u32, code: u32 },
    /// Raw axis value in `[-1.0, 1.0]`, before dead-zone handling
    ControllerAxis {
        device: u32,
        stick: u32,
        axis: u32,
        value: f32,
    },
}

/// A pull-based producer of input events, polled once per frame
pub trait EventSource {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Append every event that arrived since the last poll
    fn poll(&mut self, events: &mut VecDeque<InputEvent>);
}

/// An event source that replays events queued ahead of time
#[derive(Debug, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedSource {
    /// Create an empty scripted source
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events delivered on one future poll
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }
}

impl EventSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn poll(&mut self, events: &mut VecDeque<InputEvent>) {
        if let Some(frame) = self.frames.pop_front() {
            events.extend(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_delivers_one_frame_per_poll() {
        let mut source = ScriptedSource::new();
        source.push_frame(vec![InputEvent::KeyPressed(4)]);
        source.push_frame(vec![InputEvent::KeyReleased(4), InputEvent::FocusLost]);

        let mut events = VecDeque::new();
        source.poll(&mut events);
        assert_eq!(events.len(), 1);

        events.clear();
        source.poll(&mut events);
        assert_eq!(
            events.iter().cloned().collect::<Vec<_>>(),
            vec![InputEvent::KeyReleased(4), InputEvent::FocusLost]
        );

        events.clear();
        source.poll(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_scripted_source_empty_poll() {
        let mut source = ScriptedSource::new();
        let mut events = VecDeque::new();
        source.poll(&mut events);
        assert!(events.is_empty());
    }
}
