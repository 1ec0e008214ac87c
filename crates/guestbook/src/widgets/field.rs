//! Single-line text entry field.
//!
//! Holds a character buffer and an insertion point. Keyboard handling
//! covers plain typing plus the usual line-editing chords. Control
//! characters never enter the buffer; tabs and newlines arrive as
//! their own key events and are handled (or ignored) by the caller.

use tealight::{Key, KeyMsg};
use unicode_width::UnicodeWidthChar;

use crate::theme::Theme;

/// Single-line input model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    prompt: String,
    placeholder: String,
    value: Vec<char>,
    pos: usize,
    focus: bool,
    /// Maximum display width in columns (0 = unlimited).
    width: usize,
}

impl Field {
    /// A fresh, empty, unfocused field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt: "> ".to_string(),
            placeholder: String::new(),
            value: Vec::new(),
            pos: 0,
            focus: false,
            width: 0,
        }
    }

    /// Set the placeholder shown while the field is empty.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Limit the rendered value to `width` columns (0 = unlimited).
    ///
    /// Overflowing input scrolls: the tail stays visible behind a
    /// leading ellipsis.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// The current value as a string.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the value, dropping control characters, and move the
    /// insertion point to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().filter(|c| !c.is_control()).collect();
        self.pos = self.value.len();
    }

    /// Whether the value is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.iter().all(|c| c.is_whitespace())
    }

    /// Clear the value and return the insertion point to the start.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Give the field keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Whether the field has keyboard focus.
    #[must_use]
    pub const fn focused(&self) -> bool {
        self.focus
    }

    /// The insertion point, in characters.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    fn insert(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.value.insert(self.pos, c);
        self.pos += 1;
    }

    /// Handle a key press while the field holds focus.
    pub fn handle_key(&mut self, key: &KeyMsg) {
        match key.key {
            Key::Chars => {
                for &c in &key.chars {
                    self.insert(c);
                }
            }
            Key::Space => self.insert(' '),
            Key::Backspace => {
                if self.pos > 0 {
                    self.pos -= 1;
                    self.value.remove(self.pos);
                }
            }
            Key::Delete => {
                if self.pos < self.value.len() {
                    self.value.remove(self.pos);
                }
            }
            Key::Left => self.pos = self.pos.saturating_sub(1),
            Key::Right => self.pos = (self.pos + 1).min(self.value.len()),
            Key::Home | Key::CtrlA => self.pos = 0,
            Key::End | Key::CtrlE => self.pos = self.value.len(),
            Key::CtrlU => {
                self.value.drain(..self.pos);
                self.pos = 0;
            }
            Key::CtrlK => {
                self.value.truncate(self.pos);
            }
            Key::CtrlW => self.delete_word_backward(),
            _ => {}
        }
    }

    /// Delete the word before the insertion point, plus any spaces
    /// between it and the point.
    fn delete_word_backward(&mut self) {
        let mut start = self.pos;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.pos);
        self.pos = start;
    }

    /// First visible character index for the current width window,
    /// and whether anything was scrolled off.
    fn window_start(&self) -> (usize, bool) {
        if self.width == 0 {
            return (0, false);
        }
        let mut used = 0;
        let mut start = self.value.len();
        while start > 0 {
            let w = self.value[start - 1].width().unwrap_or(0);
            if used + w > self.width {
                break;
            }
            used += w;
            start -= 1;
        }
        (start, start > 0)
    }

    /// Render the field. A block cursor marks the insertion point
    /// while focused.
    pub fn view(&self, theme: &Theme) -> String {
        let prompt = theme.muted(&self.prompt);
        let cursor = if self.focus { "\u{2588}" } else { "" };

        if self.value.is_empty() {
            return format!("{prompt}{cursor}{}", theme.muted(&self.placeholder));
        }

        let (start, scrolled) = self.window_start();
        let visible = &self.value[start..];
        let at = self.pos.saturating_sub(start).min(visible.len());
        let before: String = visible[..at].iter().collect();
        let after: String = visible[at..].iter().collect();

        let mut out = prompt;
        if scrolled {
            out.push('\u{2026}');
        }
        out.push_str(&before);
        out.push_str(cursor);
        out.push_str(&after);
        out
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
