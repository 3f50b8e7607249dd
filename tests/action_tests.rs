use serde_json::json;
use slack_blockkit::action::{self, Button};
use slack_blockkit::object;

#[test]
fn button_minimal_has_only_required_keys() {
    let button = action::button(object::plain_text("Click me"), "a1");

    let value = serde_json::to_value(&button).expect("serializes");
    assert_eq!(
        value,
        json!({
            "type": "button",
            "text": {"type": "plain_text", "text": "Click me", "emoji": true},
            "action_id": "a1"
        })
    );
    assert!(value.get("value").is_none());
    assert!(value.get("url").is_none());
    assert!(value.get("style").is_none());
    assert!(value.get("confirm").is_none());
}

#[test]
fn button_with_all_optionals() {
    let button = action::button(object::plain_text("Delete"), "delete_item")
        .value("item-7")
        .url("https://example.com/items/7")
        .style("danger")
        .confirm(object::confirm(
            object::plain_text("Delete item?"),
            object::mrkdwn("This *cannot* be undone."),
            object::plain_text("Delete"),
            object::plain_text("Keep"),
        ));

    let value = serde_json::to_value(&button).expect("serializes");
    assert_eq!(value["value"], "item-7");
    assert_eq!(value["url"], "https://example.com/items/7");
    assert_eq!(value["style"], "danger");
    assert_eq!(value["confirm"]["title"]["text"], "Delete item?");
}

#[test]
fn style_is_passed_through_unvalidated() {
    // Anything the caller supplies goes on the wire; Slack does the rejecting
    let button = action::button(object::plain_text("Odd"), "odd").style("chartreuse");
    let value = serde_json::to_value(&button).expect("serializes");
    assert_eq!(value["style"], "chartreuse");
}

#[test]
fn button_round_trips() {
    let original = action::button(object::plain_text("Go"), "go").value("v1");
    let rendered = serde_json::to_string(&original).expect("serializes");
    let parsed: Button = serde_json::from_str(&rendered).expect("parses back");
    assert_eq!(parsed, original);
}
