//! The off-chain metadata document model.
//!
//! Field names follow the token-metadata JSON standard verbatim
//! (`trait_type`, `external_url`, `properties.files[].type`), so the
//! serialized document is what wallets and marketplaces expect to find
//! behind the asset URI. The document is immutable once uploaded; a broken
//! image reference here is a permanent, user-visible defect.

use serde::{Deserialize, Serialize};

use crate::error::MintSdkError;
use crate::shared::ContentUri;

/// A single trait key/value pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// An associated file in the properties block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyFile {
    pub uri: ContentUri,
    #[serde(rename = "type")]
    pub file_type: String,
}

/// Asset category tag, serialized lowercase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Video,
    Audio,
    Vr,
    Html,
}

/// The properties block: associated files plus a category tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Properties {
    pub files: Vec<PropertyFile>,
    pub category: Category,
}

/// The full off-chain metadata document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: ContentUri,
    pub external_url: Option<String>,
    pub attributes: Vec<Attribute>,
    pub properties: Properties,
}

impl NftMetadata {
    /// Build a document around an already-uploaded image.
    ///
    /// The image URI doubles as the first properties-block file, mirroring
    /// how renderers discover the primary media.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: ContentUri,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: image.clone(),
            external_url: None,
            attributes: Vec::new(),
            properties: Properties {
                files: vec![PropertyFile {
                    uri: image,
                    file_type: content_type.into(),
                }],
                category: Category::Image,
            },
        }
    }

    pub fn external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    pub fn attribute(mut self, trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(trait_type, value));
        self
    }

    /// Reject documents that are not safe to upload.
    ///
    /// The image field must already hold a resolvable URI: metadata upload
    /// never precedes image upload, and an empty reference would be frozen
    /// into the document forever.
    pub fn validate(&self) -> Result<(), MintSdkError> {
        if self.name.is_empty() {
            return Err(MintSdkError::Validation("name must not be empty".into()));
        }
        if self.image.as_str().is_empty() {
            return Err(MintSdkError::Validation(
                "image URI is unresolved; upload the image first".into(),
            ));
        }
        Ok(())
    }
}
