//! The comment board widget.
//!
//! An ordered list of comments plus the submission form. The list
//! starts from its seed, appends at the tail on every successful
//! submission, and never shrinks.

use crate::data::{Comment, fixture_comments};
use crate::messages::RejectReason;
use crate::theme::Theme;
use crate::widgets::field::Field;

/// Display width for the form fields.
const FIELD_WIDTH: usize = 40;

/// Comment list and submission form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    comments: Vec<Comment>,
    /// Contributor name entry.
    pub name: Field,
    /// Message body entry.
    pub body: Field,
}

impl Board {
    /// A board starting from the given seed.
    #[must_use]
    pub fn new(seed: Vec<Comment>) -> Self {
        let mut name = Field::new();
        name.set_placeholder("your name");
        name.set_width(FIELD_WIDTH);

        let mut body = Field::new();
        body.set_placeholder("leave a message");
        body.set_width(FIELD_WIDTH);

        Self {
            comments: seed,
            name,
            body,
        }
    }

    /// A board seeded with the built-in fixture comments.
    #[must_use]
    pub fn with_fixture() -> Self {
        Self::new(fixture_comments())
    }

    /// Read-only ordered projection of the comments.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Whether the board holds no comments. Only reachable with an
    /// explicitly empty seed; the built-in fixture has two.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Append a comment at the tail.
    ///
    /// Total: whatever strings are given are stored as-is. Callers
    /// wanting the blank-rejection policy go through [`try_submit`].
    ///
    /// [`try_submit`]: Self::try_submit
    pub fn submit(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.comments.push(Comment::new(name, body));
    }

    /// Submit the form.
    ///
    /// A blank (empty or whitespace-only) name or body refuses the
    /// submission and leaves both fields untouched, so a half-typed
    /// comment survives the refusal. On success the typed strings are
    /// appended unmodified, both fields are cleared, and the new
    /// comment's index is returned.
    pub fn try_submit(&mut self) -> Result<usize, RejectReason> {
        if self.name.is_blank() {
            return Err(RejectReason::EmptyName);
        }
        if self.body.is_blank() {
            return Err(RejectReason::EmptyBody);
        }

        self.submit(self.name.value(), self.body.value());
        self.name.reset();
        self.body.reset();
        Ok(self.comments.len() - 1)
    }

    /// Render the comment list, one bulleted line per comment in
    /// insertion order.
    pub fn render_list(&self, theme: &Theme) -> String {
        self.comments
            .iter()
            .map(|c| format!("  \u{2022} {}: {}", theme.accent(&c.name), c.body))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the whole widget: list header, comments, form.
    pub fn view(&self, theme: &Theme) -> String {
        let header = theme.title(&format!("Comments ({})", self.len()));
        let list = self.render_list(theme);
        let form = format!(
            "  Name:    {}\n  Message: {}",
            self.name.view(theme),
            self.body.view(theme)
        );
        format!("{header}\n{list}\n\n{form}")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_fixture()
    }
}
