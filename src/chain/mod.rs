//! On-chain asset creation.
//!
//! The mpl-core `CreateV1` instruction is built by hand (the program is
//! shank-based: a one-byte enum index followed by borsh-encoded args), then
//! signed and submitted through the nonblocking RPC client.

pub mod client;
pub mod constants;
pub mod instructions;

pub use client::ChainClient;
pub use instructions::build_create_asset_ix;
