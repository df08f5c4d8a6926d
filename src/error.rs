//! Unified SDK error types.
//!
//! Each workflow stage has its own error kind so callers can distinguish a
//! bad keypair file from a rejected upload from a failed chain submission
//! without inspecting error messages.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum MintSdkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Mint error: {0}")]
    Mint(#[from] MintError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Identity / configuration errors. Fatal: the workflow cannot proceed
/// without a usable signing identity.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed secret key: {0}")]
    MalformedKey(String),

    #[error("missing required configuration: {0}")]
    Missing(&'static str),
}

/// Uploader-layer errors.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("uploader returned {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("timeout")]
    Timeout,

    #[error("empty payload for {filename}")]
    EmptyPayload { filename: String },

    #[error("invalid uploader response: {0}")]
    InvalidResponse(String),

    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Chain-layer errors: transaction construction, signing, or submission.
#[derive(Error, Debug)]
pub enum MintError {
    #[error("RPC request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("signing failed: {0}")]
    Signer(#[from] solana_signer::SignerError),
}
