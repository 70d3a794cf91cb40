//! Byte layout of the presale contract account.
//!
//! The record is an Anchor-style account: an 8-byte discriminator followed by
//! the state fields. All multi-byte integers are little-endian. These offsets
//! are the contract's ABI, owned by the on-chain program — they are defined
//! once here and never recomputed or inferred from record content, so a
//! contract upgrade is handled by editing this table.
//!
//! The mint offsets (40/72/104) were taken from working diagnostic reads, not
//! from the contract source itself; treat them as unverified against the
//! program's own layout until confirmed.

/// Account discriminator length.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Length of a 32-byte public-key field.
pub const KEY_LEN: usize = 32;

/// Length of a fixed-width 64-bit integer field.
pub const U64_LEN: usize = 8;

/// Presale authority, `[8, 40)`.
pub const AUTHORITY_OFFSET: usize = DISCRIMINATOR_LEN;

/// Sale token mint, `[40, 72)`.
pub const TOKEN_MINT_OFFSET: usize = 40;

/// USDC payment mint, `[72, 104)`.
pub const USDC_MINT_OFFSET: usize = 72;

/// USDT payment mint, `[104, 136)`.
pub const USDT_MINT_OFFSET: usize = 104;

/// VIP window open time, `[296, 304)`, signed Unix seconds.
pub const VIP_START_OFFSET: usize = 296;

/// VIP window close time, `[304, 312)`, signed Unix seconds.
pub const VIP_END_OFFSET: usize = 304;

/// Number of VIP buyers so far, `[320, 328)`, unsigned.
pub const VIP_BUYERS_OFFSET: usize = 320;

/// VIP buyer capacity, `[328, 336)`, unsigned.
pub const VIP_MAX_BUYERS_OFFSET: usize = 328;

/// Minimum valid record length: highest offset used plus its field width.
pub const MIN_RECORD_LEN: usize = VIP_MAX_BUYERS_OFFSET + U64_LEN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_record_len_covers_every_field() {
        assert_eq!(MIN_RECORD_LEN, 336);
        assert!(AUTHORITY_OFFSET + KEY_LEN <= MIN_RECORD_LEN);
        assert!(USDT_MINT_OFFSET + KEY_LEN <= MIN_RECORD_LEN);
        assert!(VIP_MAX_BUYERS_OFFSET + U64_LEN <= MIN_RECORD_LEN);
    }
}
