//! Off-chain decoder and diagnostics for the presale contract account.
//!
//! The pipeline is fetch → decode → evaluate: [`fetch::PresaleProbe`] pulls
//! the raw account bytes over RPC, [`state::PresaleState::decode`] turns
//! them into a structured value using the fixed ABI offsets in [`layout`],
//! and the window/capacity predicates on [`state::PresaleState`] derive the
//! VIP facts a caller actually wants. Decoder and evaluator are pure and
//! safe to run concurrently on independent buffers; only the fetch
//! suspends.

pub mod decode;
pub mod errors;
pub mod fetch;
pub mod layout;
pub mod pda;
pub mod report;
pub mod state;

pub use decode::decode_account;
pub use errors::{DecodeError, ProbeError};
pub use fetch::PresaleProbe;
pub use report::MintExpectations;
pub use state::{PresaleState, VipStatus};
