//! Keypair loading and the acting identity.
//!
//! The identity authorizes and pays for everything the workflow does: the
//! uploader bills its balance, and the mint transaction is signed by it.
//! Loaded once, read-only afterwards.

use std::path::Path;

use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::{Signer, SignerError};

use crate::error::ConfigError;

/// The acting identity: a keypair bound for the lifetime of the workflow.
pub struct Identity {
    keypair: Keypair,
}

impl Identity {
    /// Load from a Solana CLI keypair file (a JSON array of integers, the
    /// `id.json` format produced by `solana-keygen`).
    ///
    /// The path is required external configuration. There is no default:
    /// a keypair location is never portable across machines.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        let bytes: Vec<u8> = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::MalformedKey(format!("not a JSON byte array: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Construct from a raw 64-byte secret key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let keypair = Keypair::try_from(bytes)
            .map_err(|e| ConfigError::MalformedKey(e.to_string()))?;
        Ok(Self { keypair })
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    pub(crate) fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

/// Identities sign anywhere a keypair would.
impl Signer for Identity {
    fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
        self.keypair.try_pubkey()
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.keypair.try_sign_message(message)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Secret material never appears in debug output.
        f.debug_struct("Identity")
            .field("pubkey", &self.pubkey())
            .finish()
    }
}
