//! Interleaved message content.
//!
//! A message is either a bare string or a sequence of typed items. The serde
//! representation is untagged at the top level so that `"hello"`,
//! `{"type": "text", "text": "hello"}` and a list of such items all deserialize.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder emitted for image items in plain-text form.
const IMAGE_PLACEHOLDER: &str = "<image>";

/// Image reference carried by a [`ContentItem::Image`]. At least one of `url` or `data` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base64-encoded image bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// One typed piece of message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { text: String },
    Image { image: ImageContent },
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        ContentItem::Image {
            image: ImageContent {
                url: Some(url.into()),
                data: None,
            },
        }
    }

    fn as_str(&self) -> &str {
        match self {
            ContentItem::Text { text } => text,
            ContentItem::Image { .. } => IMAGE_PLACEHOLDER,
        }
    }
}

/// A conversational message: plain text, a single item, or a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterleavedContent {
    Text(String),
    Item(ContentItem),
    Items(Vec<ContentItem>),
}

impl InterleavedContent {
    /// Key-value form for template rendering.
    ///
    /// Plain text stays a JSON string so `{{ messages[0] }}` renders the text itself;
    /// structured items expand into objects with their `type` and fields.
    pub fn to_template_value(&self) -> Value {
        match self {
            InterleavedContent::Text(text) => Value::String(text.clone()),
            InterleavedContent::Item(item) => item_value(item),
            InterleavedContent::Items(items) => Value::Array(items.iter().map(item_value).collect()),
        }
    }
}

fn item_value(item: &ContentItem) -> Value {
    // Serializing a plain enum of strings into a Value cannot fail.
    serde_json::to_value(item).unwrap_or(Value::Null)
}

impl From<String> for InterleavedContent {
    fn from(text: String) -> Self {
        InterleavedContent::Text(text)
    }
}

impl From<&str> for InterleavedContent {
    fn from(text: &str) -> Self {
        InterleavedContent::Text(text.to_string())
    }
}

impl From<ContentItem> for InterleavedContent {
    fn from(item: ContentItem) -> Self {
        InterleavedContent::Item(item)
    }
}

impl From<Vec<ContentItem>> for InterleavedContent {
    fn from(items: Vec<ContentItem>) -> Self {
        InterleavedContent::Items(items)
    }
}

/// Plain-text form of a message.
///
/// Text items contribute their text, image items contribute `<image>`, and
/// item lists are joined with a single space.
pub fn interleaved_content_as_str(content: &InterleavedContent) -> String {
    match content {
        InterleavedContent::Text(text) => text.clone(),
        InterleavedContent::Item(item) => item.as_str().to_string(),
        InterleavedContent::Items(items) => items
            .iter()
            .map(ContentItem::as_str)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_bare_string_as_text() {
        let c: InterleavedContent = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(c, InterleavedContent::Text("hi".to_string()));
    }

    #[test]
    fn deserializes_item_list() {
        let c: InterleavedContent = serde_json::from_str(
            r#"[{"type":"text","text":"look"},{"type":"image","image":{"url":"http://x/y.png"}}]"#,
        )
        .unwrap();
        assert_eq!(
            c,
            InterleavedContent::Items(vec![
                ContentItem::text("look"),
                ContentItem::image_url("http://x/y.png"),
            ])
        );
    }
}
