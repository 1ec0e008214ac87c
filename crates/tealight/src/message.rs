//! Message types for the Elm Architecture.
//!
//! Messages are the only way state changes in tealight. Every key
//! press, resize, and custom event reaches the model as a message.

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// Any `Send + 'static` type can be carried as a message. Use
/// [`Message::new`] to wrap a value and [`Message::downcast`] to take
/// the original back out.
///
/// # Example
///
/// ```rust
/// use tealight::Message;
///
/// struct Posted(usize);
///
/// let msg = Message::new(Posted(3));
/// if let Some(posted) = msg.downcast::<Posted>() {
///     assert_eq!(posted.0, 3);
/// }
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Wrap any sendable value as a message.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Try to take the message back out as a specific type.
    ///
    /// Returns `Some(T)` if the message holds a `T`, otherwise `None`.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Try to borrow the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check whether the message holds a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

// Built-in message types

/// Message to quit the program gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitMsg;

/// Message for Ctrl+C interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptMsg;

/// Message carrying the terminal window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSizeMsg {
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}

/// Internal message to set the terminal window title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SetWindowTitleMsg(pub String);

/// Internal message to request the current window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RequestWindowSizeMsg;

/// Internal message for concurrent command execution.
pub(crate) struct BatchMsg(pub Vec<super::Cmd>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_downcast_roundtrip() {
        struct Probe(i32);

        let msg = Message::new(Probe(7));
        assert!(msg.is::<Probe>());
        let inner = msg.downcast::<Probe>().unwrap();
        assert_eq!(inner.0, 7);
    }

    #[test]
    fn message_downcast_wrong_type() {
        struct A;
        struct B;

        let msg = Message::new(A);
        assert!(!msg.is::<B>());
        assert!(msg.downcast::<B>().is_none());
    }

    #[test]
    fn message_downcast_ref_keeps_ownership() {
        let msg = Message::new(41i64);
        assert_eq!(msg.downcast_ref::<i64>(), Some(&41));
        // Still usable after the borrow.
        assert_eq!(msg.downcast::<i64>(), Some(41));
    }

    #[test]
    fn quit_msg_is_detectable() {
        let msg = Message::new(QuitMsg);
        assert!(msg.is::<QuitMsg>());
    }

    #[test]
    fn window_size_msg_fields() {
        let msg = WindowSizeMsg {
            width: 80,
            height: 24,
        };
        assert_eq!(msg.width, 80);
        assert_eq!(msg.height, 24);
    }
}
