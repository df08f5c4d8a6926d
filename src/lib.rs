//! # coremint
//!
//! A Rust SDK for minting Metaplex Core NFTs on Solana: upload an image and
//! its JSON metadata to Arweave via an Irys node, then create the on-chain
//! asset in a single confirmed transaction.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, metadata document model, network constants
//! 2. **Identity** — Keypair loading from the Solana CLI `id.json` format
//! 3. **Uploader** — `IrysUploader` HTTP client with per-endpoint retry policies
//! 4. **Chain** — mpl-core `CreateV1` instruction building + RPC submission
//! 5. **Workflow** — `MintWorkflow`: the upload-then-mint sequence end-to-end
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coremint::prelude::*;
//!
//! let identity = Identity::from_file("/home/me/.config/solana/id.json")?;
//! let workflow = MintWorkflow::builder()
//!     .cluster(Cluster::Devnet)
//!     .identity(identity)
//!     .build()?;
//!
//! let receipt = workflow.run(MintRequest {
//!     name: "My NFT".into(),
//!     description: "This is an NFT on Solana".into(),
//!     image_bytes: std::fs::read("image.png")?,
//!     image_filename: "image.png".into(),
//!     image_content_type: "image/png".into(),
//!     external_url: Some("https://example.com".into()),
//!     attributes: vec![],
//! }).await?;
//!
//! println!("{}", receipt.explorer_tx_url());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all layers.
pub mod shared;

/// The off-chain metadata document model.
pub mod metadata;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and cluster selection.
pub mod network;

// ── Layer 2: Identity ────────────────────────────────────────────────────────

/// Keypair loading and the acting identity.
pub mod identity;

// ── Layer 3: Uploader ────────────────────────────────────────────────────────

/// Irys uploader HTTP client with retry policies.
pub mod uploader;

// ── Layer 4: Chain ───────────────────────────────────────────────────────────

/// On-chain asset creation: mpl-core instruction building + submission.
pub mod chain;

// ── Layer 5: Workflow ────────────────────────────────────────────────────────

/// `MintWorkflow` — the primary entry point.
pub mod workflow;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::ContentUri;

    // Metadata document
    pub use crate::metadata::{Attribute, Category, NftMetadata, Properties, PropertyFile};

    // Uploader
    pub use crate::uploader::retry::{RetryConfig, RetryPolicy};
    pub use crate::uploader::{IrysUploader, Tag, UploadableFile};

    // Chain
    pub use crate::chain::ChainClient;

    // Identity
    pub use crate::identity::Identity;

    // Errors
    pub use crate::error::{ConfigError, MintError, MintSdkError, UploadError};

    // Network
    pub use crate::network::{Cluster, ARWEAVE_GATEWAY_HOST, IRYS_GATEWAY_HOST};

    // Workflow
    pub use crate::workflow::{MintReceipt, MintRequest, MintWorkflow, MintWorkflowBuilder};
}
