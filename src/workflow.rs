//! `MintWorkflow` — the upload-then-mint sequence end-to-end.
//!
//! Four stages, strictly in order, each awaited before the next begins:
//! identity binding (at build), image upload, metadata upload, on-chain
//! create. Any failure is terminal; prior uploads are not cleaned up (they
//! are content-addressed and harmless to leave behind).

use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;

use crate::chain::ChainClient;
use crate::error::{ConfigError, MintError, MintSdkError, UploadError};
use crate::identity::Identity;
use crate::metadata::{Attribute, NftMetadata};
use crate::network::{Cluster, IRYS_GATEWAY_HOST};
use crate::shared::ContentUri;
use crate::uploader::{IrysUploader, UploadableFile};

/// Everything needed to mint one NFT.
#[derive(Debug, Clone)]
pub struct MintRequest {
    pub name: String,
    pub description: String,
    pub image_bytes: Vec<u8>,
    pub image_filename: String,
    /// Must accurately describe `image_bytes`; gateways serve it as-is.
    pub image_content_type: String,
    pub external_url: Option<String>,
    pub attributes: Vec<Attribute>,
}

/// The result of a successful run.
#[derive(Debug, Clone)]
pub struct MintReceipt {
    pub asset: Pubkey,
    pub signature: Signature,
    pub image_uri: ContentUri,
    pub metadata_uri: ContentUri,
    cluster: Cluster,
}

impl MintReceipt {
    /// Base58 transaction signature.
    pub fn signature_base58(&self) -> String {
        self.signature.to_string()
    }

    /// Solana Explorer link for the create transaction.
    pub fn explorer_tx_url(&self) -> String {
        self.cluster.explorer_tx_url(&self.signature)
    }

    /// Metaplex Core explorer link for the asset.
    pub fn core_explorer_url(&self) -> String {
        self.cluster.core_explorer_url(&self.asset)
    }
}

/// The primary entry point: holds the bound identity, the uploader client,
/// and the chain client.
///
/// Construction is explicit — endpoint, uploader node, gateway host, and
/// identity all come in through the builder; nothing is read from globals.
#[derive(Debug)]
pub struct MintWorkflow {
    identity: Identity,
    uploader: IrysUploader,
    chain: ChainClient,
    cluster: Cluster,
}

impl MintWorkflow {
    pub fn builder() -> MintWorkflowBuilder {
        MintWorkflowBuilder::default()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn uploader(&self) -> &IrysUploader {
        &self.uploader
    }

    pub fn chain(&self) -> &ChainClient {
        &self.chain
    }

    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    // ── Stage operations ─────────────────────────────────────────────────

    /// Upload one file and return its (gateway-rewritten) URI.
    pub async fn upload_file(&self, file: &UploadableFile) -> Result<ContentUri, UploadError> {
        let uris = self.uploader.upload(std::slice::from_ref(file)).await?;
        uris.into_iter()
            .next()
            .ok_or_else(|| UploadError::InvalidResponse("no receipt returned".into()))
    }

    /// Validate and upload a metadata document.
    ///
    /// Fails before any network call if the document still has an unresolved
    /// image reference — metadata upload never precedes image upload.
    pub async fn upload_metadata(&self, metadata: &NftMetadata) -> Result<ContentUri, MintSdkError> {
        metadata.validate()?;
        Ok(self.uploader.upload_json(metadata).await?)
    }

    /// Create the on-chain asset referencing an uploaded metadata URI.
    ///
    /// A fresh asset keypair is generated per call, so minting twice with
    /// identical inputs yields two distinct assets.
    pub async fn mint(
        &self,
        name: &str,
        metadata_uri: &ContentUri,
    ) -> Result<(Pubkey, Signature), MintError> {
        let asset = Keypair::new();
        tracing::debug!(asset = %asset.pubkey(), "generated asset signer");
        self.chain
            .send_create(&self.identity, &asset, name, metadata_uri.as_str())
            .await
    }

    // ── End-to-end ───────────────────────────────────────────────────────

    /// Run the full sequence: image upload → metadata upload → mint.
    ///
    /// Fail-fast: the first error aborts the run. Uploads that succeeded
    /// before a later failure remain on storage and stay resolvable.
    pub async fn run(&self, request: MintRequest) -> Result<MintReceipt, MintSdkError> {
        let image = UploadableFile::new(
            request.image_bytes,
            request.image_filename,
            request.image_content_type.clone(),
        )
        .map_err(MintSdkError::Upload)?;

        tracing::info!(filename = %image.filename, "uploading image");
        let image_uri = self.upload_file(&image).await?;

        let mut metadata = NftMetadata::new(
            &request.name,
            &request.description,
            image_uri.clone(),
            &request.image_content_type,
        );
        metadata.external_url = request.external_url;
        metadata.attributes = request.attributes;

        tracing::info!("uploading metadata");
        let metadata_uri = self.upload_metadata(&metadata).await?;

        tracing::info!(name = %request.name, "creating asset");
        let (asset, signature) = self.mint(&request.name, &metadata_uri).await?;

        Ok(MintReceipt {
            asset,
            signature,
            image_uri,
            metadata_uri,
            cluster: self.cluster,
        })
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MintWorkflowBuilder {
    cluster: Cluster,
    rpc_url: Option<String>,
    uploader_url: Option<String>,
    gateway_host: String,
    identity: Option<Identity>,
}

impl Default for MintWorkflowBuilder {
    fn default() -> Self {
        Self {
            cluster: Cluster::Devnet,
            rpc_url: None,
            uploader_url: None,
            gateway_host: IRYS_GATEWAY_HOST.to_string(),
            identity: None,
        }
    }
}

impl MintWorkflowBuilder {
    /// Target cluster; picks the default RPC endpoint and uploader node.
    pub fn cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = cluster;
        self
    }

    /// Override the RPC endpoint.
    pub fn rpc_url(mut self, url: &str) -> Self {
        self.rpc_url = Some(url.to_string());
        self
    }

    /// Override the uploader node address.
    pub fn uploader_url(mut self, url: &str) -> Self {
        self.uploader_url = Some(url.to_string());
        self
    }

    /// Override the alternate gateway host URIs are rewritten to.
    pub fn gateway_host(mut self, host: &str) -> Self {
        self.gateway_host = host.to_string();
        self
    }

    /// The acting identity. Required.
    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn build(self) -> Result<MintWorkflow, MintSdkError> {
        let identity = self
            .identity
            .ok_or(ConfigError::Missing("identity"))?;

        let rpc_url = self
            .rpc_url
            .unwrap_or_else(|| self.cluster.rpc_url().to_string());
        let uploader_url = self
            .uploader_url
            .unwrap_or_else(|| self.cluster.uploader_url().to_string());

        Ok(MintWorkflow {
            identity,
            uploader: IrysUploader::new(&uploader_url, &self.gateway_host),
            chain: ChainClient::new(&rpc_url),
            cluster: self.cluster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity() -> Identity {
        Identity::from_bytes(&Keypair::new().to_bytes()).unwrap()
    }

    #[test]
    fn test_builder_requires_identity() {
        let err = MintWorkflow::builder().build().unwrap_err();
        assert!(matches!(
            err,
            MintSdkError::Config(ConfigError::Missing("identity"))
        ));
    }

    #[test]
    fn test_builder_defaults_follow_cluster() {
        let workflow = MintWorkflow::builder()
            .cluster(Cluster::Devnet)
            .identity(test_identity())
            .build()
            .unwrap();

        assert_eq!(workflow.cluster(), Cluster::Devnet);
        assert_eq!(
            workflow.uploader().base_url(),
            crate::network::DEVNET_UPLOADER_URL
        );
        assert_eq!(workflow.uploader().gateway_host(), IRYS_GATEWAY_HOST);
    }

    #[test]
    fn test_builder_overrides_win() {
        let workflow = MintWorkflow::builder()
            .identity(test_identity())
            .uploader_url("http://127.0.0.1:9999")
            .gateway_host("gateway.example.com")
            .build()
            .unwrap();

        assert_eq!(workflow.uploader().base_url(), "http://127.0.0.1:9999");
        assert_eq!(workflow.uploader().gateway_host(), "gateway.example.com");
    }

    #[tokio::test]
    async fn test_metadata_with_unresolved_image_fails_before_upload() {
        // Uploader points at an unroutable address; validation must reject
        // the document before any network call is made.
        let workflow = MintWorkflow::builder()
            .identity(test_identity())
            .uploader_url("http://240.0.0.0:1")
            .build()
            .unwrap();

        let mut doc = NftMetadata::new("My NFT", "desc", ContentUri::new("x"), "image/png");
        doc.image = ContentUri::new("");

        let err = workflow.upload_metadata(&doc).await.unwrap_err();
        assert!(matches!(err, MintSdkError::Validation(_)));
    }
}
