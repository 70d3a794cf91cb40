//! Fixed-offset decoding of the raw presale account record.
//!
//! Decoding is all-or-nothing: a call yields either a complete
//! [`PresaleState`] or one [`DecodeError`] variant, never a partial value.
//! The function is pure — no I/O, no retries, deterministic for given bytes.

use solana_program::pubkey::Pubkey;

use crate::errors::DecodeError;
use crate::layout::{
    AUTHORITY_OFFSET, KEY_LEN, MIN_RECORD_LEN, TOKEN_MINT_OFFSET, U64_LEN, USDC_MINT_OFFSET,
    USDT_MINT_OFFSET, VIP_BUYERS_OFFSET, VIP_END_OFFSET, VIP_MAX_BUYERS_OFFSET, VIP_START_OFFSET,
};
use crate::state::PresaleState;

/// Read a 32-byte key at `offset`. The bytes are copied verbatim as an
/// opaque identifier; nothing beyond the length is validated.
pub fn read_pubkey(data: &[u8], offset: usize) -> Result<Pubkey, DecodeError> {
    let field = data
        .get(offset..offset + KEY_LEN)
        .ok_or(DecodeError::InvalidKey { offset })?;
    Pubkey::try_from(field).map_err(|_| DecodeError::InvalidKey { offset })
}

/// Read a little-endian i64 at `offset`.
pub fn read_i64(data: &[u8], offset: usize) -> Result<i64, DecodeError> {
    Ok(i64::from_le_bytes(read_word(data, offset)?))
}

/// Read a little-endian u64 at `offset`.
pub fn read_u64(data: &[u8], offset: usize) -> Result<u64, DecodeError> {
    Ok(u64::from_le_bytes(read_word(data, offset)?))
}

fn read_word(data: &[u8], offset: usize) -> Result<[u8; U64_LEN], DecodeError> {
    let field = data
        .get(offset..offset + U64_LEN)
        .ok_or(DecodeError::TooShort { len: data.len() })?;
    let mut word = [0u8; U64_LEN];
    word.copy_from_slice(field);
    Ok(word)
}

impl PresaleState {
    /// Decode one raw account record.
    ///
    /// Returns [`DecodeError::TooShort`] when the record is smaller than
    /// [`MIN_RECORD_LEN`]; otherwise every field is read at its fixed
    /// offset from the layout table.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < MIN_RECORD_LEN {
            return Err(DecodeError::TooShort { len: data.len() });
        }

        Ok(Self {
            authority: read_pubkey(data, AUTHORITY_OFFSET)?,
            token_mint: read_pubkey(data, TOKEN_MINT_OFFSET)?,
            usdc_mint: read_pubkey(data, USDC_MINT_OFFSET)?,
            usdt_mint: read_pubkey(data, USDT_MINT_OFFSET)?,
            vip_start: read_i64(data, VIP_START_OFFSET)?,
            vip_end: read_i64(data, VIP_END_OFFSET)?,
            vip_buyers_count: read_u64(data, VIP_BUYERS_OFFSET)?,
            vip_max_buyers: read_u64(data, VIP_MAX_BUYERS_OFFSET)?,
        })
    }
}

/// Adapter for the fetch boundary: an absent account becomes
/// [`DecodeError::NotFound`] — never `TooShort`, which is reserved for a
/// record that exists but is undersized.
pub fn decode_account(data: Option<&[u8]>) -> Result<PresaleState, DecodeError> {
    match data {
        None => Err(DecodeError::NotFound),
        Some(bytes) => PresaleState::decode(bytes),
    }
}
