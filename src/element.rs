//! Display elements embedded inside blocks.

use serde::{Deserialize, Serialize};

/// An image element, usable as a section accessory or context element.
///
/// Both fields are required by Slack. The URL is passed through as given;
/// no format checking happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(rename = "type")]
    kind: String,
    pub image_url: String,
    pub alt_text: String,
}

/// Build an image element from its URL and alt text.
#[must_use]
pub fn image(url: impl Into<String>, alt_text: impl Into<String>) -> ImageElement {
    ImageElement {
        kind: "image".to_string(),
        image_url: url.into(),
        alt_text: alt_text.into(),
    }
}
