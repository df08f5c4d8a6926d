//! Shared newtypes used across all layers.
//!
//! These types are serialization-transparent: they serialize/deserialize as
//! plain JSON strings, so they can be embedded directly in wire types and the
//! metadata document without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── ContentUri ──────────────────────────────────────────────────────────────

/// A resolvable URI pointing at durably stored content
/// (e.g. `"https://gateway.irys.xyz/AbC123"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentUri(String);

impl ContentUri {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// URI for an uploader transaction id on the given gateway host.
    pub fn for_tx(gateway_host: &str, tx_id: &str) -> Self {
        Self(format!("https://{gateway_host}/{tx_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The host portion of the URI, if one is present.
    pub fn host(&self) -> Option<&str> {
        let rest = self.0.split_once("://")?.1;
        Some(rest.split('/').next().unwrap_or(rest))
    }

    /// Rewrite the host portion to an alternate gateway, leaving scheme and
    /// path untouched. The content is the same; only the access point moves.
    ///
    /// URIs without a host (no `scheme://` prefix) are returned unchanged.
    pub fn with_host(&self, new_host: &str) -> Self {
        match self.0.split_once("://") {
            Some((scheme, rest)) => {
                let path = rest.split_once('/').map(|(_, p)| p);
                match path {
                    Some(p) => Self(format!("{scheme}://{new_host}/{p}")),
                    None => Self(format!("{scheme}://{new_host}")),
                }
            }
            None => self.clone(),
        }
    }
}

impl std::fmt::Display for ContentUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentUri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContentUri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for ContentUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContentUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ContentUri(s))
    }
}
