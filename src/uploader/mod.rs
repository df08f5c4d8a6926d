//! Irys uploader HTTP client with per-endpoint retry policies.
//!
//! Uploads are paid for by the bound identity's balance on the node, so the
//! client also exposes the node's price and balance queries. Upload POSTs are
//! never retried (an upload is not idempotent); the read-only queries use the
//! idempotent retry policy.

pub mod client;
pub mod retry;
pub mod wire;

pub use client::IrysUploader;
pub use retry::{RetryConfig, RetryPolicy};

use crate::error::UploadError;

/// A name/value tag attached to an upload.
///
/// Tags travel with the stored transaction; at minimum every file carries a
/// `Content-Type` tag so gateways serve it with the right media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A binary payload ready for upload: bytes, a filename, and tags.
///
/// Consumed once by the upload stage; nothing is retained afterwards.
#[derive(Debug, Clone)]
pub struct UploadableFile {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub tags: Vec<Tag>,
}

impl UploadableFile {
    /// Wrap raw bytes with a filename and a `Content-Type` tag.
    ///
    /// The content type must accurately describe the payload: gateways trust
    /// the tag, and a wrong one makes renderers misinterpret the content.
    pub fn new(
        bytes: Vec<u8>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Result<Self, UploadError> {
        let filename = filename.into();
        if bytes.is_empty() {
            return Err(UploadError::EmptyPayload { filename });
        }
        Ok(Self {
            bytes,
            filename,
            tags: vec![Tag::new("Content-Type", content_type)],
        })
    }

    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name, value));
        self
    }

    /// The value of the `Content-Type` tag, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case("Content-Type"))
            .map(|t| t.value.as_str())
    }
}
