//! Mint a single Core NFT on devnet: upload the image, upload the metadata,
//! create the asset, print the explorer links.
//!
//! Configuration via environment (or a `.env` file):
//! - `COREMINT_KEYPAIR` — path to a Solana CLI keypair file (required)
//! - `COREMINT_IMAGE`   — path to the image to upload (default `image.png`)
//! - `COREMINT_NAME`    — asset display name (default `My NFT`)

use coremint::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), MintSdkError> {
    let keypair_path = std::env::var("COREMINT_KEYPAIR")
        .map_err(|_| ConfigError::Missing("COREMINT_KEYPAIR"))?;
    let image_path = std::env::var("COREMINT_IMAGE").unwrap_or_else(|_| "image.png".to_string());
    let name = std::env::var("COREMINT_NAME").unwrap_or_else(|_| "My NFT".to_string());

    let identity = Identity::from_file(&keypair_path)?;
    let workflow = MintWorkflow::builder()
        .cluster(Cluster::Devnet)
        .identity(identity)
        .build()?;

    let image_bytes = std::fs::read(&image_path).map_err(|source| ConfigError::Unreadable {
        path: image_path.clone(),
        source,
    })?;
    let filename = std::path::Path::new(&image_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.png".to_string());
    let image = UploadableFile::new(image_bytes, filename, "image/png")?;

    println!("Uploading Image...");
    let image_uri = workflow.upload_file(&image).await?;
    println!("imageUri: {image_uri}");

    let metadata = NftMetadata::new(&name, "This is an NFT on Solana", image_uri, "image/png")
        .external_url("https://example.com")
        .attribute("trait1", "value1")
        .attribute("trait2", "value2");

    println!("Uploading Metadata...");
    let metadata_uri = workflow.upload_metadata(&metadata).await?;
    println!("metadataUri: {metadata_uri}");

    println!("Creating NFT...");
    let (asset, signature) = workflow.mint(&name, &metadata_uri).await?;

    println!("\nNFT Created");
    println!("View Transaction on Solana Explorer");
    println!("{}", workflow.cluster().explorer_tx_url(&signature));
    println!();
    println!("View NFT on Metaplex Core Explorer");
    println!("{}", workflow.cluster().core_explorer_url(&asset));

    Ok(())
}
