//! Markdown parsing port

use pulldown_cmark::{Event, Parser, Tag};

/// Converts markdown into plain text
///
/// Consumed by `RichTextContent` at construction time.
pub trait MarkdownParser: Send + Sync {
    fn to_plain_text(&self, markdown: &str) -> String;
}

/// Default markdown-to-text implementation built on `pulldown-cmark`
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownParser;

impl MarkdownParser for PulldownParser {
    fn to_plain_text(&self, markdown: &str) -> String {
        let mut out = String::new();
        for event in Parser::new(markdown) {
            match event {
                Event::Text(text) | Event::Code(text) => out.push_str(&text),
                Event::SoftBreak | Event::HardBreak => out.push(' '),
                Event::End(
                    Tag::Paragraph
                    | Tag::Heading(..)
                    | Tag::Item
                    | Tag::BlockQuote
                    | Tag::CodeBlock(_),
                ) => {
                    if !out.is_empty() && !out.ends_with(' ') {
                        out.push(' ');
                    }
                }
                _ => {}
            }
        }
        out.trim().to_string()
    }
}
