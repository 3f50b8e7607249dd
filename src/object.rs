//! Composition objects shared by blocks and interactive elements.

use serde::{Deserialize, Serialize};

/// A Block Kit text object.
///
/// Slack distinguishes `plain_text` from `mrkdwn`, and each kind carries the
/// one formatting flag that applies to it: `emoji` controls emoji expansion
/// in plain text, `verbatim` suppresses auto-linking in mrkdwn. The `type`
/// tag selects the variant on the wire, so a plain text object never carries
/// a `verbatim` key and a mrkdwn object never carries an `emoji` key.
///
/// # Examples
///
/// ```
/// use slack_blockkit::object;
///
/// let greeting = object::plain_text("Hello :wave:");
/// let detail = object::mrkdwn("See <https://example.com|the docs>").verbatim(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String, emoji: bool },
    Mrkdwn { text: String, verbatim: bool },
}

impl TextObject {
    /// The raw message text, whichever kind this is.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            TextObject::PlainText { text, .. } | TextObject::Mrkdwn { text, .. } => text,
        }
    }

    /// Override the `emoji` flag. Only plain text has one; on mrkdwn text
    /// this is a no-op.
    #[must_use]
    pub fn emoji(mut self, enable: bool) -> Self {
        if let TextObject::PlainText { emoji, .. } = &mut self {
            *emoji = enable;
        }
        self
    }

    /// Override the `verbatim` flag. Only mrkdwn text has one; on plain text
    /// this is a no-op.
    #[must_use]
    pub fn verbatim(mut self, enable: bool) -> Self {
        if let TextObject::Mrkdwn { verbatim, .. } = &mut self {
            *verbatim = enable;
        }
        self
    }
}

/// A confirmation dialog attached to an interactive element.
///
/// Slack shows the dialog before dispatching the action. Confirm objects
/// carry no `type` tag of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirm {
    pub title: TextObject,
    pub text: TextObject,
    pub confirm: TextObject,
    pub deny: TextObject,
}

/// Build a `plain_text` object with emoji expansion enabled.
#[must_use]
pub fn plain_text(message: impl Into<String>) -> TextObject {
    TextObject::PlainText {
        text: message.into(),
        emoji: true,
    }
}

/// Build a `mrkdwn` object with `verbatim` off, so Slack auto-links
/// channel names, user mentions, and URLs in the text.
#[must_use]
pub fn mrkdwn(message: impl Into<String>) -> TextObject {
    TextObject::Mrkdwn {
        text: message.into(),
        verbatim: false,
    }
}

/// Build a confirmation dialog from its four text objects.
#[must_use]
pub fn confirm(
    title: TextObject,
    text: TextObject,
    confirm: TextObject,
    deny: TextObject,
) -> Confirm {
    Confirm {
        title,
        text,
        confirm,
        deny,
    }
}
