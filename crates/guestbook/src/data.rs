//! Comment records and seed data.
//!
//! A fresh board starts from the built-in two-record fixture. A JSON
//! seed file can replace it (`--seed-file`); the file is read once at
//! startup and never written back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A single guestbook entry. Immutable once appended to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Who left the comment.
    pub name: String,
    /// What they wrote.
    pub body: String,
}

impl Comment {
    /// Create a comment from name and body.
    #[must_use]
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// The built-in seed: exactly two comments, so a fresh board always
/// shows the same baseline.
#[must_use]
pub fn fixture_comments() -> Vec<Comment> {
    vec![
        Comment::new("Margaret Hale", "Lovely little corner of the terminal."),
        Comment::new("Arthur Clennam", "Signing in from the night shift."),
    ]
}

/// Errors from loading a seed file.
#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    /// The file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        /// Path as given on the command line.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for a list of comments.
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        /// Path as given on the command line.
        path: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but holds no comments.
    #[error("seed file {path} contains no comments")]
    Empty {
        /// Path as given on the command line.
        path: String,
    },
}

/// Load comments from a JSON seed file.
///
/// The file holds a JSON array of `{ "name": ..., "body": ... }`
/// objects. An empty array is a configuration error: the board's
/// baseline is its seed, and a silent empty board hides typos in the
/// path far too well.
pub fn load_seed(path: &Path) -> Result<Vec<Comment>, SeedError> {
    let display = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: display.clone(),
        source,
    })?;

    let comments: Vec<Comment> =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: display.clone(),
            source,
        })?;

    if comments.is_empty() {
        return Err(SeedError::Empty { path: display });
    }

    Ok(comments)
}
