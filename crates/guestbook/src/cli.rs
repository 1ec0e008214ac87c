//! Command-line interface for the guestbook.
//!
//! Defines the CLI contract with clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Run with defaults
//! guestbook
//!
//! # Run with a custom comment seed
//! guestbook --seed-file comments.json
//!
//! # Headless render for CI
//! guestbook --self-check
//! ```

use std::path::PathBuf;

use clap::Parser;

/// A terminal guestbook: a visitor tally and a comment board.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "guestbook",
    author,
    version,
    about = "A terminal guestbook: a visitor tally and a comment board"
)]
pub struct Cli {
    /// JSON file of seed comments (replaces the built-in pair)
    ///
    /// The file holds an array of objects with "name" and "body"
    /// fields and must contain at least one comment.
    #[arg(long, env = "GUESTBOOK_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Disable ANSI styling
    ///
    /// Also honored via the NO_COLOR environment variable.
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run in the main terminal buffer instead of the alternate screen
    #[arg(long, env = "GUESTBOOK_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,

    /// Target frames per second for event polling (1-120)
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Render one frame to stdout without a TTY and exit
    ///
    /// Useful for CI validation.
    #[arg(long)]
    pub self_check: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "GUESTBOOK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
