//! Port interfaces for external collaborators
//!
//! Ports define the contracts the domain core consumes; implementations
//! (hashing backends, token issuers, markdown renderers) live in
//! infrastructure crates. The markdown port ships with a default
//! implementation so the core is usable on its own.

pub mod hasher;
pub mod markdown;
pub mod token;

pub use hasher::PasswordHasher;
pub use markdown::{MarkdownParser, PulldownParser};
pub use token::TokenProvider;
