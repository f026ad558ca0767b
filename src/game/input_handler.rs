// game/input_handler.rs

use piston_window::{Button, Key};

/// The closed set of semantic commands the simulation understands. The
/// keymap and device details stop here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    /// Only actionable while the round is over
    Restart,
    Quit,
}

/// Map a raw button press to a game command
pub fn translate_press(button: Button) -> Option<Command> {
    match button {
        Button::Keyboard(Key::Space) | Button::Keyboard(Key::Up) => Some(Command::Jump),
        Button::Keyboard(Key::R) => Some(Command::Restart),
        Button::Keyboard(Key::Escape) => Some(Command::Quit),
        _ => None,
    }
}
