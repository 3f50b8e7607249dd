//! Top-level message payload assembly.
//!
//! Blocks do not travel alone: Slack expects them inside a message payload,
//! typically posted to a `response_url` or a chat API endpoint. This module
//! provides the assembly point and its serialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::Block;
use crate::errors::BlockKitError;

/// Visibility of a message delivered through a `response_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Ephemeral,
    InChannel,
}

/// A message payload: optional response type, fallback text, and blocks.
///
/// Unset fields are omitted from the serialized payload. `blocks` is also
/// omitted while empty, so a plain-text payload stays minimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

impl MessagePayload {
    /// Fallback text shown in notifications and clients that cannot render
    /// blocks.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Visibility of a `response_url` delivery.
    #[must_use]
    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Append a block, preserving insertion order.
    #[must_use]
    pub fn block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Serialize the payload to a JSON value.
    pub fn to_value(&self) -> Result<Value, BlockKitError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize the payload to a JSON string ready for transport.
    pub fn to_json(&self) -> Result<String, BlockKitError> {
        let rendered = serde_json::to_string(self)?;
        tracing::debug!(
            blocks = self.blocks.len(),
            bytes = rendered.len(),
            "rendered message payload"
        );
        Ok(rendered)
    }
}

/// Build an empty message payload.
#[must_use]
pub fn message() -> MessagePayload {
    MessagePayload {
        response_type: None,
        text: None,
        blocks: Vec::new(),
    }
}

/// Build a payload for an ephemeral response, visible only to the user who
/// triggered the command.
#[must_use]
pub fn ephemeral(text: impl Into<String>) -> MessagePayload {
    message().text(text).response_type(ResponseType::Ephemeral)
}

/// Build a payload for a response posted publicly in the channel.
#[must_use]
pub fn in_channel(text: impl Into<String>) -> MessagePayload {
    message().text(text).response_type(ResponseType::InChannel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{block, object};
    use serde_json::json;

    #[test]
    fn ephemeral_payload_minimal() {
        let payload = ephemeral("This message is only visible to you");

        let value = payload.to_value().expect("serializes");
        assert_eq!(
            value,
            json!({
                "response_type": "ephemeral",
                "text": "This message is only visible to you"
            })
        );
    }

    #[test]
    fn in_channel_payload_sets_response_type() {
        let value = in_channel("posted publicly").to_value().expect("serializes");
        assert_eq!(value["response_type"], "in_channel");
    }

    #[test]
    fn blocks_keep_append_order() {
        let payload = message()
            .block(block::section(object::mrkdwn("*Summary*")))
            .block(block::divider())
            .block(block::context().element(object::mrkdwn("Summary completed")));

        let value = payload.to_value().expect("serializes");
        assert_eq!(value["blocks"][0]["type"], "section");
        assert_eq!(value["blocks"][1]["type"], "divider");
        assert_eq!(value["blocks"][2]["type"], "context");
        assert!(value.get("response_type").is_none());
        assert!(value.get("text").is_none());
    }

    #[test]
    fn empty_payload_serializes_to_empty_object() {
        let rendered = message().to_json().expect("serializes");
        assert_eq!(rendered, "{}");
    }

    #[test]
    fn payload_round_trips() {
        let original = in_channel("fallback")
            .block(block::section(object::plain_text("hello")))
            .block(block::divider());

        let rendered = original.to_json().expect("serializes");
        let parsed: MessagePayload = serde_json::from_str(&rendered).expect("parses back");
        assert_eq!(parsed, original);
    }
}
