//! ANSI styling for the guestbook chrome.
//!
//! A handful of named roles rather than a full style system. Styling
//! is toggled as a whole: with color off every role is the identity,
//! which keeps rendered frames byte-stable for tests and `NO_COLOR`
//! environments.

use colored::Colorize;

/// Style roles used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// A theme with ANSI styling enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { color: true }
    }

    /// A theme that renders plain text only.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Whether this theme emits ANSI styling.
    #[must_use]
    pub const fn is_color(&self) -> bool {
        self.color
    }

    /// Section titles.
    #[must_use]
    pub fn title(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    /// Highlighted values (the tally, comment authors).
    #[must_use]
    pub fn accent(&self, s: &str) -> String {
        if self.color {
            s.magenta().to_string()
        } else {
            s.to_string()
        }
    }

    /// Secondary text (hints, rules, placeholders).
    #[must_use]
    pub fn muted(&self, s: &str) -> String {
        if self.color {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }

    /// Status-line feedback after a successful action.
    #[must_use]
    pub fn success(&self, s: &str) -> String {
        if self.color {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    /// Status-line feedback for a rejected action.
    #[must_use]
    pub fn warning(&self, s: &str) -> String {
        if self.color {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
