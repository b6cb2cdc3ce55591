//! Session Events
//!
//! Everything the session reacts to arrives as an [`Event`] on one ordered
//! queue: key presses (already translated out of the terminal library's
//! types), resizes, spinner ticks and command results.

use crate::command::Message;

/// A key press, independent of the terminal backend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Esc,
    /// Tab
    Tab,
    /// Backspace
    Backspace,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Home
    Home,
    /// End
    End,
    /// Ctrl+C
    CtrlC,
    /// Ctrl+S
    CtrlS,
    /// Anything else
    Other,
}

/// Input to the reduction step
#[derive(Clone, Debug)]
pub enum Event {
    /// User pressed a key
    Key(Key),
    /// Terminal was resized
    Resize {
        /// Columns
        width: u16,
        /// Rows
        height: u16,
    },
    /// Spinner timer fired
    Tick,
    /// A command finished
    Message(Message),
}

impl From<Message> for Event {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}
