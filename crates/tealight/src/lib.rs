#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Tealight
//!
//! A small terminal UI runtime built on The Elm Architecture.
//!
//! Applications are a single [`Model`]: state plus three functions.
//! `init` produces an optional startup [`Cmd`], `update` folds
//! [`Message`]s into the state one at a time, and `view` projects the
//! state to a string for the terminal. The [`Program`] owns the
//! terminal and the event loop; the [`simulator`] drives the same
//! lifecycle headlessly for tests.
//!
//! ## Example
//!
//! ```rust
//! use tealight::{Cmd, Message, Model};
//!
//! struct Tally { value: i64 }
//!
//! impl Model for Tally {
//!     fn init(&self) -> Option<Cmd> { None }
//!     fn update(&mut self, msg: Message) -> Option<Cmd> {
//!         if let Some(n) = msg.downcast::<i64>() {
//!             self.value += n;
//!         }
//!         None
//!     }
//!     fn view(&self) -> String { self.value.to_string() }
//! }
//! ```

pub mod command;
pub mod key;
pub mod message;
pub mod program;
pub mod simulator;

pub use command::{Cmd, batch, quit, set_window_title, window_size};
pub use key::{Key, KeyMsg};
pub use message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use program::{Error, Model, Program, ProgramOptions, Result};
