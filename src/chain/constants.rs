//! Constants for the mpl-core program.

use solana_pubkey::Pubkey;
use std::str::FromStr;

lazy_static::lazy_static! {
    /// Metaplex Core Program ID
    pub static ref MPL_CORE_PROGRAM_ID: Pubkey =
        Pubkey::from_str("CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d").unwrap();
}

/// System Program ID
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk_ids::system_program::ID;

/// Instruction discriminators (single byte enum indices)
pub mod instruction {
    pub const CREATE_V1: u8 = 0;
}

/// `DataState` argument values for `CreateV1`
pub mod data_state {
    /// Asset data lives in the asset account itself.
    pub const ACCOUNT_STATE: u8 = 0;
}
