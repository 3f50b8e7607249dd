/// slack-blockkit - Typed constructors for Slack's Block Kit message schema.
///
/// This crate builds the plain data objects a Slack message is made of:
/// structural blocks (section, divider, context, actions), display elements
/// (image), interactive elements (button), composition objects (text,
/// confirm), and the link/mention markup helpers. Constructors are pure and
/// total; nothing here validates against Slack's schema, talks to the
/// network, or holds state. The caller assembles the pieces into a
/// [`payload::MessagePayload`] and serializes it for whatever transport the
/// surrounding bot uses.
///
/// # Architecture
///
/// The modules mirror the kinds of object in a message:
/// - `object` for text and confirm composition objects
/// - `element` for display elements
/// - `action` for interactive elements
/// - `block` for the structural layer
/// - `payload` for top-level assembly and serialization
/// - `helper` for link and mention markup strings
///
/// # Example
///
/// ```
/// use slack_blockkit::{action, block, helper, object, payload};
///
/// let summary = payload::ephemeral("Deploy finished")
///     .block(block::section(object::mrkdwn("*Deploy finished* :rocket:")))
///     .block(block::divider())
///     .block(
///         block::actions().element(
///             action::button(object::plain_text("View logs"), "view_logs")
///                 .url(helper::link("https://ci.example.com/run/42", None, false))
///                 .style("primary"),
///         ),
///     )
///     .block(block::context().element(object::mrkdwn(format!(
///         "Requested by {}",
///         helper::user("U12345")
///     ))));
///
/// let body = summary.to_json()?;
/// assert!(body.contains("\"response_type\":\"ephemeral\""));
/// # Ok::<(), slack_blockkit::errors::BlockKitError>(())
/// ```
// Module declarations
pub mod action;
pub mod block;
pub mod element;
pub mod errors;
pub mod helper;
pub mod object;
pub mod payload;

// Re-export main types for convenience
pub use action::Button;
pub use block::{Accessory, ActionsBlock, Block, ContextBlock, ContextElement, DividerBlock, SectionBlock};
pub use element::ImageElement;
pub use errors::BlockKitError;
pub use object::{Confirm, TextObject};
pub use payload::{MessagePayload, ResponseType};

/// Install a default `tracing` subscriber with a plain formatter.
///
/// Intended for tests and examples; an embedding application will usually
/// install its own subscriber, in which case this call is a no-op.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
