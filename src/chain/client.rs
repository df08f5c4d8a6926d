//! Chain client — transaction assembly, signing, and confirmed submission.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::chain::instructions::build_create_asset_ix;
use crate::error::MintError;
use crate::identity::Identity;

/// RPC client for submitting asset-creation transactions.
pub struct ChainClient {
    rpc: RpcClient,
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.rpc.url())
            .finish()
    }
}

impl ChainClient {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            ),
        }
    }

    pub fn rpc_url(&self) -> String {
        self.rpc.url()
    }

    /// Build, sign, and submit the create-asset transaction, waiting for
    /// confirmation.
    ///
    /// The asset keypair signs alongside the payer; its pubkey becomes the
    /// permanent asset address. This is an irreversible ledger write. On
    /// failure nothing is rolled back; any content uploaded beforehand stays
    /// on storage.
    pub async fn send_create(
        &self,
        identity: &Identity,
        asset: &Keypair,
        name: &str,
        uri: &str,
    ) -> Result<(Pubkey, Signature), MintError> {
        let payer = identity.pubkey();
        let ix = build_create_asset_ix(&asset.pubkey(), &payer, name, uri);

        let blockhash = self.rpc.get_latest_blockhash().await?;
        let mut tx = Transaction::new_with_payer(&[ix], Some(&payer));
        tx.try_sign(&[identity.keypair(), asset], blockhash)?;

        let signature = self.rpc.send_and_confirm_transaction(&tx).await?;
        tracing::debug!(%signature, asset = %asset.pubkey(), "asset created");

        Ok((asset.pubkey(), signature))
    }

    /// Payer balance in lamports, for pre-flight checks.
    pub async fn balance(&self, pubkey: &Pubkey) -> Result<u64, MintError> {
        Ok(self.rpc.get_balance(pubkey).await?)
    }
}
