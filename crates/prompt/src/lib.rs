//! # Prompt
//!
//! Conversation content types shared by the query generator and the LLM client.
//!
//! - [`InterleavedContent`]: one conversational message, either plain text or
//!   structured content items (text, image) in any order.
//! - [`ChatMessage`] / [`MessageRole`]: a single element of a chat completion
//!   `messages` array.
//!
//! ## Conversions
//!
//! - [`interleaved_content_as_str`]: plain-text form of a message, used when
//!   messages are joined into a retrieval query.
//! - [`InterleavedContent::to_template_value`]: key-value form of a message,
//!   used when messages are rendered into a prompt template.
//!
//! ## External interactions
//!
//! - **AI models**: [`ChatMessage`] maps one-to-one onto OpenAI Chat Completions messages.

mod content;

pub use content::{interleaved_content_as_str, ContentItem, ImageContent, InterleavedContent};

use serde::{Deserialize, Serialize};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}
