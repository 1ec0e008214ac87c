//! Commands for side effects.
//!
//! Commands represent work that happens off the update path and
//! produces a message when it finishes. They are the only way to
//! perform side effects in the Elm Architecture: `update` stays pure
//! and returns a `Cmd`, the program executes it and feeds the
//! resulting message back through the queue.

use crate::message::{BatchMsg, Message, QuitMsg, RequestWindowSizeMsg, SetWindowTitleMsg};

/// A command that produces a message when executed.
///
/// Commands are lazy: nothing runs until the program (or the
/// simulator) executes them.
///
/// # Example
///
/// ```rust
/// use tealight::{Cmd, Message};
///
/// struct Refreshed;
///
/// fn refresh() -> Cmd {
///     Cmd::new(|| Message::new(Refreshed))
/// }
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// The empty command.
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

/// Batch multiple commands to run concurrently.
///
/// Batched commands run with no ordering guarantees. Use this to
/// return more than one command from `init` or `update`.
///
/// # Example
///
/// ```rust
/// use tealight::{batch, set_window_title, window_size};
///
/// let cmd = batch(vec![
///     Some(set_window_title("Guestbook")),
///     Some(window_size()),
/// ]);
/// assert!(cmd.is_some());
/// ```
pub fn batch(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid_cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid_cmds.len() {
        0 => None,
        1 => valid_cmds.into_iter().next(),
        _ => Some(Cmd::new_optional(move || {
            Some(Message::new(BatchMsg(valid_cmds)))
        })),
    }
}

/// Command that signals the program to quit.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

/// Command to set the terminal window title.
pub fn set_window_title(title: impl Into<String>) -> Cmd {
    let title = title.into();
    Cmd::new(move || Message::new(SetWindowTitleMsg(title)))
}

/// Command to query the current window size.
///
/// The result is delivered as a [`crate::WindowSizeMsg`].
pub fn window_size() -> Cmd {
    Cmd::new(|| Message::new(RequestWindowSizeMsg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_new_produces_message() {
        let cmd = Cmd::new(|| Message::new(42i32));
        let msg = cmd.execute().unwrap();
        assert_eq!(msg.downcast::<i32>().unwrap(), 42);
    }

    #[test]
    fn cmd_new_optional_can_be_silent() {
        let cmd = Cmd::new_optional(|| None);
        assert!(cmd.execute().is_none());
    }

    #[test]
    fn cmd_none_is_none() {
        assert!(Cmd::none().is_none());
    }

    #[test]
    fn batch_empty() {
        assert!(batch(vec![]).is_none());
        assert!(batch(vec![None, None]).is_none());
    }

    #[test]
    fn batch_single_collapses() {
        let cmd = batch(vec![Some(Cmd::new(|| Message::new(1i32)))]).unwrap();
        // A single-entry batch executes directly, without a BatchMsg wrapper.
        let msg = cmd.execute().unwrap();
        assert_eq!(msg.downcast::<i32>().unwrap(), 1);
    }

    #[test]
    fn batch_many_wraps() {
        let cmd = batch(vec![
            Some(Cmd::new(|| Message::new(1i32))),
            Some(Cmd::new(|| Message::new(2i32))),
        ])
        .unwrap();
        let msg = cmd.execute().unwrap();
        assert!(msg.is::<BatchMsg>());
    }

    #[test]
    fn quit_produces_quit_msg() {
        let msg = quit().execute().unwrap();
        assert!(msg.is::<QuitMsg>());
    }

    #[test]
    fn set_window_title_produces_title_msg() {
        let msg = set_window_title("Guestbook").execute().unwrap();
        assert!(msg.is::<SetWindowTitleMsg>());
    }
}
