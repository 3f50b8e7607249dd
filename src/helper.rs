//! Message-text formatting helpers.
//!
//! Slack link formatting uses angle brackets:
//! - `<http://example.com/>`
//! - `<http://www.example.com|This message *is* a link>`
//!
//! Source: https://docs.slack.dev/messaging/formatting-message-text/#linking-urls

/// Referer-stripping redirect prefix for outbound links. The target URL is
/// appended raw, without percent-encoding.
const NULLREFER_PREFIX: &str = "http://www.nullrefer.com/?";

/// Format a URL as Slack link markup.
///
/// With a non-empty `title`, renders `<url|title>`; otherwise `<url>`. When
/// `null_referer` is set, the URL is first prefixed with the nullrefer
/// redirector so the click does not leak the origin page.
///
/// Neither `url` nor `title` is escaped; a `|`, `<`, or `>` in either will
/// produce malformed markup, so callers must pre-sanitize.
///
/// # Examples
///
/// ```
/// use slack_blockkit::helper::link;
///
/// assert_eq!(link("http://example.com", None, false), "<http://example.com>");
/// assert_eq!(
///     link("http://example.com", Some("Example"), false),
///     "<http://example.com|Example>"
/// );
/// ```
#[must_use]
pub fn link(url: &str, title: Option<&str>, null_referer: bool) -> String {
    let clean_url = if null_referer {
        format!("{NULLREFER_PREFIX}{url}")
    } else {
        url.to_string()
    };

    match title {
        Some(title) if !title.is_empty() => format!("<{clean_url}|{title}>"),
        _ => format!("<{clean_url}>"),
    }
}

/// Format a user ID as mention markup, e.g. `<@U12345>`.
#[must_use]
pub fn user(user_id: &str) -> String {
    format!("<@{user_id}>")
}

/// Format a channel ID as channel-reference markup, e.g. `<#C12345>`.
#[must_use]
pub fn channel(channel_id: &str) -> String {
    format!("<#{channel_id}>")
}
