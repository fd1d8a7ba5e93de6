//! Tests for plain-text and template-value conversion of [`prompt::InterleavedContent`].
//!
//! External interactions: none (pure function tests).

use prompt::{interleaved_content_as_str, ChatMessage, ContentItem, InterleavedContent, MessageRole};
use serde_json::json;

/// **Test: Plain text converts to itself.**
#[test]
fn as_str_plain_text() {
    let c = InterleavedContent::from("what is RAG?");
    assert_eq!(interleaved_content_as_str(&c), "what is RAG?");
}

/// **Test: A single text item converts to its text.**
#[test]
fn as_str_single_text_item() {
    let c = InterleavedContent::from(ContentItem::text("hello"));
    assert_eq!(interleaved_content_as_str(&c), "hello");
}

/// **Test: Item lists are joined with a space; images become `<image>`.**
#[test]
fn as_str_item_list_with_image() {
    let c = InterleavedContent::from(vec![
        ContentItem::text("describe"),
        ContentItem::image_url("https://example.com/cat.png"),
        ContentItem::text("please"),
    ]);
    assert_eq!(interleaved_content_as_str(&c), "describe <image> please");
}

/// **Test: Empty item list converts to the empty string.**
#[test]
fn as_str_empty_item_list() {
    let c = InterleavedContent::Items(vec![]);
    assert_eq!(interleaved_content_as_str(&c), "");
}

/// **Test: Plain text stays a string in template form; items expand to records.**
#[test]
fn template_value_shapes() {
    assert_eq!(InterleavedContent::from("hi").to_template_value(), json!("hi"));
    assert_eq!(
        InterleavedContent::from(ContentItem::text("hi")).to_template_value(),
        json!({"type": "text", "text": "hi"})
    );
    assert_eq!(
        InterleavedContent::from(vec![ContentItem::image_url("u")]).to_template_value(),
        json!([{"type": "image", "image": {"url": "u"}}])
    );
}

/// **Test: ChatMessage constructors set the role.**
#[test]
fn chat_message_roles() {
    assert_eq!(ChatMessage::user("q").role, MessageRole::User);
    assert_eq!(ChatMessage::system("s").role, MessageRole::System);
    assert_eq!(ChatMessage::assistant("a").content, "a");
}
