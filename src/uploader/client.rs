//! Low-level uploader client — `IrysUploader`.
//!
//! Speaks the node's plain HTTP surface: `POST /tx/<token>` to store bytes,
//! `GET /price/<token>/<len>` and `GET /account/balance/<token>` for the
//! payment side. The storage protocol itself (bundling, receipts, funding)
//! is the node's business; this client only consumes its REST contract.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::UploadError;
use crate::shared::ContentUri;
use crate::uploader::retry::{RetryConfig, RetryPolicy};
use crate::uploader::wire::{BalanceResponse, UploadReceipt};
use crate::uploader::UploadableFile;

/// Payment token route on the node. Uploads are billed in SOL.
const TOKEN_ROUTE: &str = "solana";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for an Irys uploader node.
#[derive(Debug)]
pub struct IrysUploader {
    base_url: String,
    gateway_host: String,
    client: Client,
    /// Policy for the read-only price/balance queries. Upload POSTs never
    /// retry regardless of this setting.
    query_retry: RetryPolicy,
}

impl IrysUploader {
    /// `base_url` is the uploader node; `gateway_host` is the alternate
    /// gateway every returned URI is rewritten to.
    pub fn new(base_url: &str, gateway_host: &str) -> Self {
        Self::with_timeout(base_url, gateway_host, DEFAULT_TIMEOUT)
    }

    /// Same as [`new`](Self::new) with an explicit request timeout.
    pub fn with_timeout(base_url: &str, gateway_host: &str, timeout: Duration) -> Self {
        let builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            gateway_host: gateway_host.to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            query_retry: RetryPolicy::Idempotent,
        }
    }

    /// Override the retry policy for price/balance queries
    /// (default [`RetryPolicy::Idempotent`]).
    pub fn query_retry(mut self, retry: RetryPolicy) -> Self {
        self.query_retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn gateway_host(&self) -> &str {
        &self.gateway_host
    }

    // ── Uploads ──────────────────────────────────────────────────────────

    /// Upload files in order, returning one URI per file.
    ///
    /// Every URI has its host rewritten from the node's default gateway to
    /// the configured alternate before it is returned; downstream consumers
    /// only ever see the rewritten form. Not retried and not deduplicated:
    /// uploading the same bytes twice stores (and bills) two transactions.
    pub async fn upload(&self, files: &[UploadableFile]) -> Result<Vec<ContentUri>, UploadError> {
        let mut uris = Vec::with_capacity(files.len());
        for file in files {
            let receipt = self.post_file(file).await?;
            tracing::debug!(id = %receipt.id, filename = %file.filename, "stored file");
            uris.push(self.uri_for(&receipt));
        }
        Ok(uris)
    }

    /// Serialize a document to JSON and upload it, same contract as
    /// [`upload`](Self::upload).
    pub async fn upload_json(
        &self,
        document: &impl serde::Serialize,
    ) -> Result<ContentUri, UploadError> {
        let bytes = serde_json::to_vec(document)
            .map_err(|e| UploadError::InvalidResponse(format!("unserializable document: {e}")))?;
        let file = UploadableFile::new(bytes, "metadata.json", "application/json")?;
        let receipt = self.post_file(&file).await?;
        tracing::debug!(id = %receipt.id, "stored json document");
        Ok(self.uri_for(&receipt))
    }

    // ── Payment queries ──────────────────────────────────────────────────

    /// Price in lamports to store `byte_len` bytes.
    pub async fn price(&self, byte_len: usize) -> Result<u64, UploadError> {
        let url = format!("{}/price/{}/{}", self.base_url, TOKEN_ROUTE, byte_len);
        self.get(&url, self.query_retry.clone()).await
    }

    /// The identity's prepaid balance on the node, in lamports.
    pub async fn balance(&self, address: &str) -> Result<u64, UploadError> {
        let url = format!(
            "{}/account/balance/{}?address={}",
            self.base_url, TOKEN_ROUTE, address
        );
        let resp: BalanceResponse = self.get(&url, self.query_retry.clone()).await?;
        resp.balance
            .parse()
            .map_err(|_| UploadError::InvalidResponse(format!("bad balance: {}", resp.balance)))
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// Deadline overruns get their own variant; everything else stays a
    /// transport error.
    fn map_transport_err(e: reqwest::Error) -> UploadError {
        if e.is_timeout() {
            UploadError::Timeout
        } else {
            UploadError::Reqwest(e)
        }
    }

    fn uri_for(&self, receipt: &UploadReceipt) -> ContentUri {
        // The node addresses content on arweave.net by default; rewrite to
        // the alternate gateway before anything downstream sees the URI.
        ContentUri::for_tx(crate::network::ARWEAVE_GATEWAY_HOST, &receipt.id)
            .with_host(&self.gateway_host)
    }

    /// Single POST of one file's bytes, tags as headers. Never retried.
    async fn post_file(&self, file: &UploadableFile) -> Result<UploadReceipt, UploadError> {
        let url = format!("{}/tx/{}", self.base_url, TOKEN_ROUTE);
        let mut req = self.client.post(&url).body(file.bytes.clone());
        for tag in &file.tags {
            req = req.header(tag.name.as_str(), tag.value.as_str());
        }

        let resp = req.send().await.map_err(Self::map_transport_err)?;
        Self::parse_response(resp).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, UploadError> {
        let config = match retry {
            RetryPolicy::None => {
                let resp = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(Self::map_transport_err)?;
                return Self::parse_response(resp).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            let result = match self.client.get(url).send().await {
                Ok(resp) => Self::parse_response(resp).await,
                Err(e) => Err(Self::map_transport_err(e)),
            };

            match result {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        UploadError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        UploadError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        UploadError::Timeout => true,
                        UploadError::Reqwest(re) => re.is_connect() || re.is_request(),
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(UploadError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, UploadError> {
        let status = resp.status();

        if status.is_success() {
            return resp.json::<T>().await.map_err(Self::map_transport_err);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(UploadError::NotFound(body_text)),
            429 => Err(UploadError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(UploadError::BadRequest(body_text)),
            _ => Err(UploadError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for IrysUploader {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            gateway_host: self.gateway_host.clone(),
            client: self.client.clone(),
            query_retry: self.query_retry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let uploader = IrysUploader::new("https://devnet.irys.xyz/", "gateway.irys.xyz");
        assert_eq!(uploader.base_url(), "https://devnet.irys.xyz");
    }

    #[test]
    fn test_uri_for_rewrites_to_alternate_gateway() {
        let uploader = IrysUploader::new("https://devnet.irys.xyz", "gateway.irys.xyz");
        let receipt = UploadReceipt {
            id: "AbC123".into(),
            timestamp: None,
        };
        let uri = uploader.uri_for(&receipt);
        assert_eq!(uri.as_str(), "https://gateway.irys.xyz/AbC123");
        assert_ne!(uri.host(), Some(crate::network::ARWEAVE_GATEWAY_HOST));
    }
}
