//! URL value objects
//!
//! `WebsiteUrl` and `LogoUrl` support an explicit absent sentinel so that
//! aggregates never hold a bare `Option` for them; `FileUrl` is always
//! present on the aggregates that carry it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

fn parse_url(kind: &str, value: &str) -> DomainResult<url::Url> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::validation(
            format!("{}.Empty", kind),
            "URL cannot be empty",
        ));
    }
    let parsed = url::Url::parse(value).map_err(|e| {
        DomainError::validation(
            format!("{}.InvalidFormat", kind),
            format!("'{}' is not a valid URL: {}", value, e),
        )
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(DomainError::validation(
            format!("{}.InvalidScheme", kind),
            "URL must use http or https",
        ));
    }
    Ok(parsed)
}

macro_rules! define_optional_url {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Option<url::Url>);

        impl $name {
            /// Create a validated URL
            pub fn create(value: &str) -> DomainResult<Self> {
                Ok(Self(Some(parse_url($kind, value)?)))
            }

            /// Sentinel representing an absent URL
            pub fn none() -> Self {
                Self(None)
            }

            pub fn is_none(&self) -> bool {
                self.0.is_none()
            }

            pub fn as_str(&self) -> Option<&str> {
                self.0.as_ref().map(|u| u.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.0 {
                    Some(u) => write!(f, "{}", u),
                    None => write!(f, "-"),
                }
            }
        }
    };
}

define_optional_url!(
    /// Company website URL, possibly absent
    WebsiteUrl,
    "WebsiteUrl"
);
define_optional_url!(
    /// Company logo URL, possibly absent
    LogoUrl,
    "LogoUrl"
);

/// URL of an uploaded file, always present
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileUrl(url::Url);

impl FileUrl {
    /// Create a validated file URL
    pub fn create(value: &str) -> DomainResult<Self> {
        Ok(Self(parse_url("FileUrl", value)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_website_url() {
        let url = WebsiteUrl::create("https://example.com/about").unwrap();
        assert!(!url.is_none());
        assert_eq!(url.as_str(), Some("https://example.com/about"));
    }

    #[test]
    fn test_none_sentinel() {
        let url = LogoUrl::none();
        assert!(url.is_none());
        assert_eq!(url.as_str(), None);
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = WebsiteUrl::create("  ").unwrap_err();
        assert_eq!(err.code(), "WebsiteUrl.Empty");
    }

    #[test]
    fn test_malformed_url_rejected() {
        let err = FileUrl::create("not a url").unwrap_err();
        assert_eq!(err.code(), "FileUrl.InvalidFormat");
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = FileUrl::create("ftp://example.com/cv.pdf").unwrap_err();
        assert_eq!(err.code(), "FileUrl.InvalidScheme");
    }
}
