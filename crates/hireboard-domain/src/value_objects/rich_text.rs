//! Rich text content value object

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::ports::MarkdownParser;

/// Markdown content with its plain-text rendering
///
/// The plain text is derived once at construction through the injected
/// parser; both representations are frozen together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextContent {
    markdown: String,
    plain_text: String,
}

impl RichTextContent {
    pub const MAX_LENGTH: usize = 50_000;

    /// Create validated rich text content
    pub fn create(markdown: &str, parser: &dyn MarkdownParser) -> DomainResult<Self> {
        if markdown.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "RichTextContent.TooLong",
                format!("Content cannot exceed {} characters", Self::MAX_LENGTH),
            ));
        }
        Ok(Self {
            markdown: markdown.to_string(),
            plain_text: parser.to_plain_text(markdown),
        })
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }
}
