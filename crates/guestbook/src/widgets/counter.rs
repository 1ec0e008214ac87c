//! The visitor tally widget.
//!
//! A single signed integer, starting at zero, moved by exactly one
//! per trigger. Rendering is the decimal form of the value; there are
//! no bounds and no failure modes.

use tealight::{Key, KeyMsg};

use crate::theme::Theme;

/// Counter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// A fresh counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// The current value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Decimal projection of the current value.
    #[must_use]
    pub fn render_value(&self) -> String {
        self.value.to_string()
    }

    /// Increment trigger: value goes up by one.
    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Decrement trigger: value goes down by one.
    pub fn decrement(&mut self) {
        self.value -= 1;
    }

    /// Handle a key press while the tally holds focus.
    ///
    /// `+`/`=`/`k`/Up increment; `-`/`j`/Down decrement. Everything
    /// else is ignored.
    pub fn handle_key(&mut self, key: &KeyMsg) {
        match key.key {
            Key::Up => self.increment(),
            Key::Down => self.decrement(),
            Key::Chars => match key.chars.first() {
                Some('+' | '=' | 'k') => self.increment(),
                Some('-' | 'j') => self.decrement(),
                _ => {}
            },
            _ => {}
        }
    }

    /// Render the tally line.
    pub fn view(&self, focused: bool, theme: &Theme) -> String {
        let marker = if focused { ">" } else { " " };
        let hint = if focused {
            format!("  {}", theme.muted("(+ up / - down)"))
        } else {
            String::new()
        };
        format!(
            "{marker} Visitor tally: {}{hint}",
            theme.accent(&self.render_value())
        )
    }
}
