//! End-to-end tests against devnet.
//!
//! These exercise the real uploader node and RPC endpoint, cost devnet SOL,
//! and require a funded keypair. All tests are `#[ignore]`.
//!
//! Run with:
//! ```bash
//! COREMINT_KEYPAIR=~/.config/solana/id.json \
//!   cargo test --test devnet_integration -- --ignored
//! ```

use coremint::prelude::*;

fn identity_from_env() -> Identity {
    let path = std::env::var("COREMINT_KEYPAIR")
        .expect("set COREMINT_KEYPAIR to a funded devnet keypair file");
    Identity::from_file(&path).expect("keypair file should load")
}

fn devnet_workflow() -> MintWorkflow {
    MintWorkflow::builder()
        .cluster(Cluster::Devnet)
        .identity(identity_from_env())
        .build()
        .expect("workflow should build")
}

/// 10KB payload with a PNG signature.
fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    bytes.resize(10 * 1024, 0);
    bytes
}

#[tokio::test]
#[ignore]
async fn test_full_mint_on_devnet() {
    let workflow = devnet_workflow();

    let receipt = workflow
        .run(MintRequest {
            name: "coremint e2e".into(),
            description: "end-to-end mint".into(),
            image_bytes: png_bytes(),
            image_filename: "image.png".into(),
            image_content_type: "image/png".into(),
            external_url: Some("https://example.com".into()),
            attributes: vec![Attribute::new("suite", "devnet")],
        })
        .await
        .expect("full run should succeed");

    // Signature decodes as base58 to 64 bytes.
    let sig_bytes = bs58::decode(receipt.signature_base58())
        .into_vec()
        .expect("signature should be base58");
    assert_eq!(sig_bytes.len(), 64);

    // Both URIs were rewritten to the alternate gateway.
    assert_eq!(receipt.image_uri.host(), Some(IRYS_GATEWAY_HOST));
    assert_eq!(receipt.metadata_uri.host(), Some(IRYS_GATEWAY_HOST));

    println!("{}", receipt.explorer_tx_url());
    println!("{}", receipt.core_explorer_url());
}

#[tokio::test]
#[ignore]
async fn test_uploader_price_is_positive() {
    let workflow = devnet_workflow();
    let price = workflow
        .uploader()
        .price(10 * 1024)
        .await
        .expect("price query should succeed");
    assert!(price > 0);
}

#[tokio::test]
#[ignore]
async fn test_two_runs_yield_distinct_assets() {
    let workflow = devnet_workflow();

    let request = MintRequest {
        name: "coremint dup".into(),
        description: "no dedup".into(),
        image_bytes: png_bytes(),
        image_filename: "image.png".into(),
        image_content_type: "image/png".into(),
        external_url: None,
        attributes: vec![],
    };

    let first = workflow.run(request.clone()).await.expect("first run");
    let second = workflow.run(request).await.expect("second run");

    // Identical inputs, distinct assets and distinct uploads.
    assert_ne!(first.asset, second.asset);
    assert_ne!(first.image_uri, second.image_uri);
}
