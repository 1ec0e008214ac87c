//! Top-level application model and key routing.
//!
//! `App` composes the two widgets under a focus ring and renders the
//! page chrome. Routing rules:
//! - Esc (and Ctrl+C, via the program's interrupt path) quits; `q`
//!   quits while the tally holds focus, and types a letter otherwise.
//! - Tab / Shift+Tab move focus: tally, name field, message field.
//! - Enter submits the form from either field.
//! - Everything else goes to whichever widget holds focus.

use tealight::{
    Cmd, Key, KeyMsg, Message, Model, WindowSizeMsg, batch, quit, set_window_title, window_size,
};

use crate::data::Comment;
use crate::messages::{CommentPosted, SubmitRejected};
use crate::theme::Theme;
use crate::widgets::{Board, Counter};

/// Which section owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The visitor tally.
    #[default]
    Tally,
    /// The name field of the form.
    Name,
    /// The message field of the form.
    Body,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::Tally => Self::Name,
            Self::Name => Self::Body,
            Self::Body => Self::Tally,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Tally => Self::Body,
            Self::Name => Self::Tally,
            Self::Body => Self::Name,
        }
    }
}

/// One-line feedback after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Posted(String),
    Refused(String),
}

/// Main application state.
pub struct App {
    counter: Counter,
    board: Board,
    focus: Focus,
    theme: Theme,
    width: usize,
    status: Option<Status>,
}

impl App {
    /// Create the app with the given comment seed and theme.
    #[must_use]
    pub fn new(seed: Vec<Comment>, theme: Theme) -> Self {
        Self {
            counter: Counter::new(),
            board: Board::new(seed),
            focus: Focus::Tally,
            theme,
            width: 80,
            status: None,
        }
    }

    /// Create the app with the built-in fixture seed.
    #[must_use]
    pub fn with_fixture(theme: Theme) -> Self {
        Self::new(crate::data::fixture_comments(), theme)
    }

    /// The tally widget.
    #[must_use]
    pub const fn counter(&self) -> &Counter {
        &self.counter
    }

    /// The comment board widget.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The current focus stop.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.board.name.blur();
        self.board.body.blur();
        match focus {
            Focus::Name => self.board.name.focus(),
            Focus::Body => self.board.body.focus(),
            Focus::Tally => {}
        }
    }

    fn submit_form(&mut self) -> Option<Cmd> {
        match self.board.try_submit() {
            Ok(index) => {
                let name = self.board.comments()[index].name.clone();
                tracing::debug!(index, name = %name, "comment appended");
                self.set_focus(Focus::Name);
                Some(Cmd::new(move || Message::new(CommentPosted { index, name })))
            }
            Err(reason) => {
                tracing::debug!(%reason, "submission refused");
                Some(Cmd::new(move || Message::new(SubmitRejected { reason })))
            }
        }
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        match key.key {
            Key::Esc | Key::CtrlC => return Some(quit()),
            Key::Tab => {
                self.set_focus(self.focus.next());
                return None;
            }
            Key::ShiftTab => {
                self.set_focus(self.focus.prev());
                return None;
            }
            Key::Enter if self.focus != Focus::Tally => return self.submit_form(),
            _ => {}
        }

        match self.focus {
            Focus::Tally => {
                if key.chars.first() == Some(&'q') {
                    return Some(quit());
                }
                self.counter.handle_key(key);
            }
            Focus::Name => self.board.name.handle_key(key),
            Focus::Body => self.board.body.handle_key(key),
        }
        None
    }

    fn render_status(&self) -> String {
        match &self.status {
            Some(Status::Posted(text)) => self.theme.success(text),
            Some(Status::Refused(text)) => self.theme.warning(text),
            None => self.theme.muted("Sign the guestbook below."),
        }
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        batch(vec![Some(set_window_title("Guestbook")), Some(window_size())])
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            return None;
        }

        if let Some(posted) = msg.downcast_ref::<CommentPosted>() {
            tracing::info!(index = posted.index, name = %posted.name, "comment posted");
            self.status = Some(Status::Posted(format!(
                "Posted comment #{} from {}.",
                posted.index + 1,
                posted.name
            )));
            return None;
        }

        if let Some(rejected) = msg.downcast_ref::<SubmitRejected>() {
            self.status = Some(Status::Refused(format!(
                "Not posted: {}.",
                rejected.reason
            )));
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }

        None
    }

    fn view(&self) -> String {
        let rule_width = self.width.clamp(20, 60);
        let rule = self.theme.muted(&"\u{2500}".repeat(rule_width));

        let header = self.theme.title("Guestbook");
        let tally = self
            .counter
            .view(self.focus == Focus::Tally, &self.theme);
        let board = self.board.view(&self.theme);
        let status = self.render_status();
        let footer = self
            .theme
            .muted("tab focus \u{b7} enter post \u{b7} esc quit");

        format!("{header}\n{rule}\n\n{tally}\n\n{board}\n\n{status}\n{footer}\n")
    }
}
