//! Unit tests for [`openai_client::mask_token`], used when API keys appear in logs.

use openai_client::mask_token;

/// **Test: Keys of 11 bytes or fewer reveal nothing.**
#[test]
fn short_keys_are_fully_masked() {
    for key in ["", "k", "sk-abc", "sk-proj-123"] {
        assert_eq!(mask_token(key), "***", "key {key:?}");
    }
}

/// **Test: Longer keys keep a 7-byte prefix and a 4-byte suffix.**
#[test]
fn long_keys_keep_prefix_and_suffix() {
    assert_eq!(mask_token("sk-proj-abcdefgh1234"), "sk-proj***1234");
    assert_eq!(mask_token("abcdefghijkl"), "abcdefg***ijkl");
}

/// **Test: Keys with multi-byte characters at the cut points do not panic.**
#[test]
fn non_ascii_keys_do_not_panic() {
    let masked = mask_token("ééééééééééé");
    assert!(masked.contains("***"));
}
