//! Tests for the default (join) query generator.

use memory_query_generator::{
    generate_default, DefaultQueryGenerator, DefaultQueryGeneratorConfig, QueryGenerator,
    QueryGeneratorContext,
};
use prompt::{interleaved_content_as_str, ContentItem, InterleavedContent};

fn config(separator: &str) -> DefaultQueryGeneratorConfig {
    DefaultQueryGeneratorConfig {
        separator: separator.to_string(),
    }
}

/// **Test: Messages are joined with the separator in their original order.**
#[test]
fn joins_in_order() {
    let messages = vec![
        InterleavedContent::from("first"),
        InterleavedContent::from(ContentItem::text("second")),
        InterleavedContent::from("third"),
    ];
    assert_eq!(generate_default(&config(" | "), &messages), "first | second | third");
    assert_eq!(generate_default(&config("\n"), &messages), "first\nsecond\nthird");
}

/// **Test: No messages gives an empty query.**
#[test]
fn empty_messages_give_empty_query() {
    assert_eq!(generate_default(&config(" "), &[]), "");
}

/// **Test: An empty separator concatenates.**
#[test]
fn empty_separator_concatenates() {
    let messages = vec![InterleavedContent::from("a"), InterleavedContent::from("b")];
    assert_eq!(generate_default(&config(""), &messages), "ab");
}

/// **Test: With one message the separator has no effect.**
#[test]
fn single_message_ignores_separator() {
    let message = InterleavedContent::from(vec![
        ContentItem::text("see"),
        ContentItem::image_url("https://example.com/a.png"),
    ]);
    let expected = interleaved_content_as_str(&message);
    for sep in ["", " ", ", ", "###"] {
        assert_eq!(generate_default(&config(sep), std::slice::from_ref(&message)), expected);
    }
}

/// **Test: The trait form matches the free function and needs no inference client.**
#[tokio::test]
async fn trait_form_matches_free_function() {
    let generator = DefaultQueryGenerator::new(config("-"));
    let messages = vec![InterleavedContent::from("x"), InterleavedContent::from("y")];
    let query = generator
        .generate(&messages, &QueryGeneratorContext::new())
        .await
        .unwrap();
    assert_eq!(generator.name(), "Default");
    assert_eq!(query, "x-y");
}
