//! Structural blocks that lay out a message.

use serde::{Deserialize, Serialize};

use crate::action::Button;
use crate::element::ImageElement;
use crate::object::TextObject;

/// Elements that can sit in a section's accessory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accessory {
    Button(Button),
    Image(ImageElement),
}

impl From<Button> for Accessory {
    fn from(button: Button) -> Self {
        Accessory::Button(button)
    }
}

impl From<ImageElement> for Accessory {
    fn from(image: ImageElement) -> Self {
        Accessory::Image(image)
    }
}

/// Elements that can appear in a context block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextElement {
    Text(TextObject),
    Image(ImageElement),
}

impl From<TextObject> for ContextElement {
    fn from(text: TextObject) -> Self {
        ContextElement::Text(text)
    }
}

impl From<ImageElement> for ContextElement {
    fn from(image: ImageElement) -> Self {
        ContextElement::Image(image)
    }
}

/// A section block: one text object plus optional fields and accessory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    #[serde(rename = "type")]
    kind: String,
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TextObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Accessory>,
}

impl SectionBlock {
    /// Identifier echoed back in interaction payloads.
    #[must_use]
    pub fn block_id(mut self, id: impl Into<String>) -> Self {
        self.block_id = Some(id.into());
        self
    }

    /// Two-column field layout rendered below the section text.
    #[must_use]
    pub fn fields(mut self, fields: Vec<TextObject>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Element rendered at the right edge of the section.
    #[must_use]
    pub fn accessory(mut self, accessory: impl Into<Accessory>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }
}

/// A divider block. Serializes to exactly `{"type": "divider"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerBlock {
    #[serde(rename = "type")]
    kind: String,
}

/// A context block: a row of small text and image elements.
///
/// Elements render in the order they were appended. An empty context block
/// still serializes its `elements` key as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBlock {
    #[serde(rename = "type")]
    kind: String,
    pub elements: Vec<ContextElement>,
}

impl ContextBlock {
    /// Append an element, preserving insertion order.
    #[must_use]
    pub fn element(mut self, element: impl Into<ContextElement>) -> Self {
        self.elements.push(element.into());
        self
    }
}

/// An actions block: a row of interactive elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsBlock {
    #[serde(rename = "type")]
    kind: String,
    pub elements: Vec<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl ActionsBlock {
    /// Append a button, preserving insertion order.
    #[must_use]
    pub fn element(mut self, button: Button) -> Self {
        self.elements.push(button);
        self
    }

    /// Identifier echoed back in interaction payloads.
    #[must_use]
    pub fn block_id(mut self, id: impl Into<String>) -> Self {
        self.block_id = Some(id.into());
        self
    }
}

/// Any block accepted by a message payload's `blocks` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Block {
    Section(SectionBlock),
    Context(ContextBlock),
    Actions(ActionsBlock),
    Divider(DividerBlock),
}

impl From<SectionBlock> for Block {
    fn from(block: SectionBlock) -> Self {
        Block::Section(block)
    }
}

impl From<ContextBlock> for Block {
    fn from(block: ContextBlock) -> Self {
        Block::Context(block)
    }
}

impl From<ActionsBlock> for Block {
    fn from(block: ActionsBlock) -> Self {
        Block::Actions(block)
    }
}

impl From<DividerBlock> for Block {
    fn from(block: DividerBlock) -> Self {
        Block::Divider(block)
    }
}

/// Build a section block around a text object.
#[must_use]
pub fn section(text: TextObject) -> SectionBlock {
    SectionBlock {
        kind: "section".to_string(),
        text,
        block_id: None,
        fields: None,
        accessory: None,
    }
}

/// Build a divider block.
#[must_use]
pub fn divider() -> DividerBlock {
    DividerBlock {
        kind: "divider".to_string(),
    }
}

/// Build an empty context block; append elements with
/// [`ContextBlock::element`].
#[must_use]
pub fn context() -> ContextBlock {
    ContextBlock {
        kind: "context".to_string(),
        elements: Vec::new(),
    }
}

/// Build an empty actions block; append buttons with
/// [`ActionsBlock::element`].
#[must_use]
pub fn actions() -> ActionsBlock {
    ActionsBlock {
        kind: "actions".to_string(),
        elements: Vec::new(),
        block_id: None,
    }
}
