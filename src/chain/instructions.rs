//! Instruction builder for mpl-core asset creation.

use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::chain::constants::{data_state, instruction, MPL_CORE_PROGRAM_ID, SYSTEM_PROGRAM_ID};

// ============================================================================
// Helper Functions
// ============================================================================

/// Create an account meta for a signer+writable account.
fn signer_mut(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new(pubkey, true)
}

/// Create an account meta for a read-only account.
fn readonly(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new_readonly(pubkey, false)
}

/// Optional account left unset: shank programs take the program's own id
/// as the placeholder.
fn unset() -> AccountMeta {
    readonly(*MPL_CORE_PROGRAM_ID)
}

/// Append a borsh-encoded string: u32 LE length prefix + UTF-8 bytes.
fn extend_borsh_str(data: &mut Vec<u8>, s: &str) {
    data.extend_from_slice(&(s.len() as u32).to_le_bytes());
    data.extend_from_slice(s.as_bytes());
}

// ============================================================================
// Instruction Builders
// ============================================================================

/// Build the mpl-core `CreateV1` instruction.
///
/// Creates a standalone asset owned by the payer, with no collection, no
/// plugins, and the payer as update authority.
///
/// Accounts:
/// 0. asset (signer, mut) - Freshly generated asset address
/// 1. collection (optional, unset)
/// 2. authority (optional, unset)
/// 3. payer (signer, mut)
/// 4. owner (optional, unset - defaults to payer)
/// 5. update_authority (optional, unset - defaults to payer)
/// 6. system_program (readonly)
/// 7. log_wrapper (optional, unset)
pub fn build_create_asset_ix(asset: &Pubkey, payer: &Pubkey, name: &str, uri: &str) -> Instruction {
    let keys = vec![
        signer_mut(*asset),
        unset(),
        unset(),
        signer_mut(*payer),
        unset(),
        unset(),
        readonly(SYSTEM_PROGRAM_ID),
        unset(),
    ];

    // Data: [discriminator, data_state (u8), name (borsh str), uri (borsh str),
    //        plugins (Option, None)]
    let mut data = Vec::with_capacity(2 + 4 + name.len() + 4 + uri.len() + 1);
    data.push(instruction::CREATE_V1);
    data.push(data_state::ACCOUNT_STATE);
    extend_borsh_str(&mut data, name);
    extend_borsh_str(&mut data, uri);
    data.push(0); // plugins: None

    Instruction {
        program_id: *MPL_CORE_PROGRAM_ID,
        accounts: keys,
        data,
    }
}
