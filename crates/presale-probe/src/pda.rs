//! Program-derived addresses used by the presale contract.

use solana_program::pubkey::Pubkey;

/// Seed of the singleton presale state account.
pub const PRESALE_SEED: &[u8] = b"presale";

/// Seed prefix of the sale-token vault, combined with the authority key.
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";

/// Address of the presale state account under `program_id`.
pub fn presale_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PRESALE_SEED], program_id)
}

/// Address of the token vault held for `authority` under `program_id`.
pub fn token_vault_address(program_id: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_VAULT_SEED, authority.as_ref()], program_id)
}
