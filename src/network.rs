//! Network URL constants and cluster selection.

use solana_pubkey::Pubkey;
use solana_signature::Signature;

/// Devnet RPC endpoint.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Mainnet-beta RPC endpoint.
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Devnet Irys uploader node.
pub const DEVNET_UPLOADER_URL: &str = "https://devnet.irys.xyz";

/// Mainnet Irys uploader node.
pub const MAINNET_UPLOADER_URL: &str = "https://node1.irys.xyz";

/// Host of the URIs the uploader hands back.
pub const ARWEAVE_GATEWAY_HOST: &str = "arweave.net";

/// Alternate gateway host every returned URI is rewritten to.
pub const IRYS_GATEWAY_HOST: &str = "gateway.irys.xyz";

/// Which Solana cluster the workflow targets.
///
/// Selects the RPC endpoint, the uploader node, and the query parameters on
/// the explorer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    Devnet,
    MainnetBeta,
}

impl Cluster {
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => DEVNET_RPC_URL,
            Cluster::MainnetBeta => MAINNET_RPC_URL,
        }
    }

    pub fn uploader_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => DEVNET_UPLOADER_URL,
            Cluster::MainnetBeta => MAINNET_UPLOADER_URL,
        }
    }

    /// Environment name used in explorer query strings.
    pub fn env_name(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::MainnetBeta => "mainnet-beta",
        }
    }

    /// Solana Explorer link for a transaction signature.
    pub fn explorer_tx_url(&self, signature: &Signature) -> String {
        match self {
            Cluster::Devnet => {
                format!("https://explorer.solana.com/tx/{signature}?cluster=devnet")
            }
            Cluster::MainnetBeta => format!("https://explorer.solana.com/tx/{signature}"),
        }
    }

    /// Metaplex Core explorer link for an asset.
    pub fn core_explorer_url(&self, asset: &Pubkey) -> String {
        match self {
            Cluster::Devnet => format!("https://core.metaplex.com/explorer/{asset}?env=devnet"),
            Cluster::MainnetBeta => format!("https://core.metaplex.com/explorer/{asset}"),
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.env_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devnet_explorer_links_carry_cluster_param() {
        let sig = Signature::default();
        let url = Cluster::Devnet.explorer_tx_url(&sig);
        assert!(url.starts_with("https://explorer.solana.com/tx/"));
        assert!(url.ends_with("?cluster=devnet"));
    }

    #[test]
    fn test_mainnet_explorer_links_have_no_params() {
        let sig = Signature::default();
        let url = Cluster::MainnetBeta.explorer_tx_url(&sig);
        assert!(!url.contains('?'));
    }

    #[test]
    fn test_core_explorer_url_contains_asset() {
        let asset = Pubkey::new_unique();
        let url = Cluster::Devnet.core_explorer_url(&asset);
        assert!(url.contains(&asset.to_string()));
        assert!(url.ends_with("?env=devnet"));
    }
}
