//! Interactive elements that dispatch `block_actions` payloads.

use serde::{Deserialize, Serialize};

use crate::object::{Confirm, TextObject};

/// A button element.
///
/// Only `text` and `action_id` are required. The optional fields start
/// absent and are omitted from the serialized object until set, leaving
/// Slack to apply its own defaults.
///
/// # Examples
///
/// ```
/// use slack_blockkit::{action, object};
///
/// let approve = action::button(object::plain_text("Approve"), "approve_request")
///     .value("req-42")
///     .style("primary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    #[serde(rename = "type")]
    kind: String,
    pub text: TextObject,
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

impl Button {
    /// Payload value echoed back in the interaction event.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// URL to open in the user's browser when the button is clicked.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Visual style. Slack accepts `primary` and `danger`; the value is
    /// passed through unvalidated and rejection is left to the platform.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Confirmation dialog shown before the action fires.
    #[must_use]
    pub fn confirm(mut self, dialog: Confirm) -> Self {
        self.confirm = Some(dialog);
        self
    }
}

/// Build a button from its label and `action_id`.
#[must_use]
pub fn button(text: TextObject, action_id: impl Into<String>) -> Button {
    Button {
        kind: "button".to_string(),
        text,
        action_id: action_id.into(),
        value: None,
        url: None,
        style: None,
        confirm: None,
    }
}
