//! File resource implementation.
//!
//! Files hold uploaded binary content, such as the images of an identity
//! document. Content travels base64 encoded.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::rest::validation::{self, Rules};
use crate::rest::{ResourceBase, ResourceErrors, Scenario, ShastaResource};

/// An uploaded file.
///
/// `name`, `content_type` and `content` can only be set on create. `size` and
/// `url` are assigned by the server.
///
/// # Example
///
/// ```rust,ignore
/// use shasta::rest::{Record, resources::File};
///
/// let bytes = std::fs::read("passport-front.jpg")?;
/// let mut file = Record::new(File::from_bytes("passport-front.jpg", "image/jpeg", &bytes));
/// file.insert(&client).await?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct File {
    #[serde(flatten)]
    pub base: ResourceBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MIME type, e.g. `image/png`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Base64-encoded content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Download URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl File {
    /// Creates a file from raw bytes, encoding them as base64.
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, content_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: Some(name.into()),
            content_type: Some(content_type.into()),
            content: Some(base64::engine::general_purpose::STANDARD.encode(bytes)),
            ..Self::default()
        }
    }

    /// Decodes the content, if present and valid base64.
    #[must_use]
    pub fn decoded_content(&self) -> Option<Vec<u8>> {
        self.content
            .as_deref()
            .and_then(|content| base64::engine::general_purpose::STANDARD.decode(content).ok())
    }
}

impl ShastaResource for File {
    const NAME: &'static str = "File";
    const PLURAL: &'static str = "files";
    const ATTRIBUTES: &'static [&'static str] = &[];
    const CREATE_ONLY: &'static [&'static str] = &["name", "content_type", "content"];
    const READ_ONLY: &'static [&'static str] = &["size", "url"];

    fn base(&self) -> &ResourceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase {
        &mut self.base
    }

    fn validate(&self, scenario: Scenario) -> ResourceErrors {
        if scenario != Scenario::Create {
            return ResourceErrors::new();
        }
        Rules::new()
            .check("name", validation::required(self.name.as_deref()))
            .check(
                "content_type",
                validation::required(self.content_type.as_deref()),
            )
            .check("content", validation::required(self.content.as_deref()))
            .check(
                "content",
                validation::base64_content(self.content.as_deref()),
            )
            .into_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_content() {
        let file = File::from_bytes("note.txt", "text/plain", b"hello");
        assert_eq!(file.content.as_deref(), Some("aGVsbG8="));
        assert_eq!(file.decoded_content(), Some(b"hello".to_vec()));
        assert!(file.validate(Scenario::Create).is_empty());
    }

    #[test]
    fn test_create_requires_every_field() {
        let errors = File::default().validate(Scenario::Create);
        assert_eq!(errors.len(), 3);

        let file = File {
            content: Some("***".into()),
            ..File::from_bytes("a.png", "image/png", &[1, 2, 3])
        };
        assert_eq!(
            file.validate(Scenario::Create).first("content"),
            Some("must be base64 encoded.")
        );
    }

    #[test]
    fn test_nothing_is_writable_after_create() {
        assert_eq!(File::safe_attributes(Scenario::Default), vec!["meta"]);
    }
}
