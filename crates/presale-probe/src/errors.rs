use thiserror::Error;

/// Terminal outcomes of a single decode attempt. The decoder never retries,
/// repairs, or returns a partial state — the caller decides whether to
/// re-fetch.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The fetch returned no account at all. Distinct from an empty or
    /// short record, which is [`DecodeError::TooShort`].
    #[error("presale account not found")]
    NotFound,

    /// The record is present but smaller than the minimum layout size.
    #[error("presale record too short: {len} bytes")]
    TooShort { len: usize },

    /// A key-shaped field is not exactly 32 bytes.
    #[error("field at offset {offset} is not a 32-byte key")]
    InvalidKey { offset: usize },
}

/// Errors surfaced by the fetch-then-decode path.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The RPC transport failed. Transient failures are the caller's
    /// problem; the probe performs exactly one call per fetch.
    #[error("rpc transport: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
