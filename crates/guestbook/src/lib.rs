#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Guestbook
//!
//! A terminal guestbook built on the tealight runtime: a visitor
//! tally you can nudge up and down, and a comment board seeded with
//! two entries that grows by one with every signed submission.
//!
//! The library exposes the application model and widgets so tests can
//! drive them headlessly through `tealight::simulator`; the binary in
//! `main.rs` wires them to a real terminal.

pub mod app;
pub mod cli;
pub mod data;
pub mod messages;
pub mod theme;
pub mod widgets;

pub use app::{App, Focus};
pub use data::{Comment, fixture_comments, load_seed};
pub use theme::Theme;
