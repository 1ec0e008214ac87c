//! Keyboard input handling.
//!
//! Key presses reach the model as [`KeyMsg`] messages. The [`Key`]
//! enum covers the editing and navigation keys a line-oriented TUI
//! needs; everything printable arrives as [`Key::Chars`].

use std::fmt;

/// Keyboard key event message.
///
/// Sent to the model's update function when a key is pressed.
///
/// # Example
///
/// ```rust
/// use tealight::{Key, KeyMsg};
///
/// fn describe(key: &KeyMsg) -> String {
///     match key.key {
///         Key::Enter => "submit".to_string(),
///         Key::Chars => key.chars.iter().collect(),
///         _ => key.to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The key that was pressed.
    pub key: Key,
    /// For [`Key::Chars`], the characters typed.
    pub chars: Vec<char>,
}

impl KeyMsg {
    /// Create a key message for a non-character key.
    pub fn from_key(key: Key) -> Self {
        Self {
            key,
            chars: Vec::new(),
        }
    }

    /// Create a key message for a typed character.
    pub fn from_char(c: char) -> Self {
        Self {
            key: Key::Chars,
            chars: vec![c],
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key == Key::Chars {
            for c in &self.chars {
                write!(f, "{c}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// The keys tealight reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character input.
    Chars,
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Escape.
    Esc,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Ctrl+A (line start).
    CtrlA,
    /// Ctrl+C (interrupt).
    CtrlC,
    /// Ctrl+E (line end).
    CtrlE,
    /// Ctrl+K (delete to line end).
    CtrlK,
    /// Ctrl+U (delete to line start).
    CtrlU,
    /// Ctrl+W (delete word backward).
    CtrlW,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Chars => "chars",
            Key::Space => " ",
            Key::Enter => "enter",
            Key::Tab => "tab",
            Key::ShiftTab => "shift+tab",
            Key::Backspace => "backspace",
            Key::Delete => "delete",
            Key::Esc => "esc",
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Home => "home",
            Key::End => "end",
            Key::CtrlA => "ctrl+a",
            Key::CtrlC => "ctrl+c",
            Key::CtrlE => "ctrl+e",
            Key::CtrlK => "ctrl+k",
            Key::CtrlU => "ctrl+u",
            Key::CtrlW => "ctrl+w",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm key event to a [`KeyMsg`].
///
/// Keys outside the supported set collapse to an empty `Chars`
/// message, which models ignore.
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> KeyMsg {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);

    let (key, chars) = match code {
        KeyCode::Char(c) if ctrl => {
            let key = match c.to_ascii_lowercase() {
                'a' => Key::CtrlA,
                'c' => Key::CtrlC,
                'e' => Key::CtrlE,
                'k' => Key::CtrlK,
                'u' => Key::CtrlU,
                'w' => Key::CtrlW,
                _ => return KeyMsg::from_char(c),
            };
            (key, Vec::new())
        }
        KeyCode::Char(' ') => (Key::Space, Vec::new()),
        KeyCode::Char(c) => (Key::Chars, vec![c]),
        KeyCode::Enter => (Key::Enter, Vec::new()),
        KeyCode::Backspace => (Key::Backspace, Vec::new()),
        KeyCode::BackTab => (Key::ShiftTab, Vec::new()),
        KeyCode::Tab if shift => (Key::ShiftTab, Vec::new()),
        KeyCode::Tab => (Key::Tab, Vec::new()),
        KeyCode::Esc => (Key::Esc, Vec::new()),
        KeyCode::Delete => (Key::Delete, Vec::new()),
        KeyCode::Up => (Key::Up, Vec::new()),
        KeyCode::Down => (Key::Down, Vec::new()),
        KeyCode::Left => (Key::Left, Vec::new()),
        KeyCode::Right => (Key::Right, Vec::new()),
        KeyCode::Home => (Key::Home, Vec::new()),
        KeyCode::End => (Key::End, Vec::new()),
        _ => (Key::Chars, Vec::new()),
    };

    KeyMsg { key, chars }
}
