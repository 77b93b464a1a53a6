use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyCode, KeyMods, MouseButton};
use macroquad::prelude::{Vec2, is_quit_requested, vec2};

/// One input occurrence delivered to the active screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerPress(Vec2),
    Key(KeyInput),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Erase,
    Char(char),
}

impl KeyInput {
    /// Printable characters only; control characters such as backspace
    /// arrive through their key code instead.
    pub fn from_char(c: char) -> Option<KeyInput> {
        if c.is_control() {
            None
        } else {
            Some(KeyInput::Char(c))
        }
    }
}

/// Events of one frame, kept in the order the window delivered them.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<InputEvent>,
}

impl EventLog {
    pub fn into_events(self) -> Vec<InputEvent> {
        self.events
    }
}

impl EventHandler for EventLog {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn char_event(&mut self, character: char, _keymods: KeyMods, _repeat: bool) {
        if let Some(key) = KeyInput::from_char(character) {
            self.events.push(InputEvent::Key(key));
        }
    }

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        if keycode == KeyCode::Backspace {
            self.events.push(InputEvent::Key(KeyInput::Erase));
        }
    }

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.events.push(InputEvent::PointerPress(vec2(x, y)));
        }
    }
}

/// Queues raw window input between frames so nothing is merged or reordered
/// however long a frame lasts.
pub struct InputRecorder {
    subscriber: usize,
}

impl InputRecorder {
    /// Must be created inside the running window.
    pub fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
        }
    }

    /// Everything that happened since the last call, oldest first.
    ///
    /// Requires `prevent_quit()` to have been called so window close arrives as
    /// [`InputEvent::Close`].
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut log = EventLog::default();
        if is_quit_requested() {
            log.events.push(InputEvent::Close);
        }
        repeat_all_miniquad_input(&mut log, self.subscriber);
        log.into_events()
    }
}
