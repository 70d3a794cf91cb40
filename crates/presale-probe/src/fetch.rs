//! RPC-backed account fetch boundary.
//!
//! The probe performs exactly one RPC call per fetch: no retry, caching, or
//! timeout. A caller that needs any of those wraps the fetch, not the
//! decode. Any non-absent response is treated as authoritative decoder
//! input.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::decode::decode_account;
use crate::errors::ProbeError;
use crate::state::PresaleState;

/// Fetches and decodes presale account records over RPC.
pub struct PresaleProbe {
    rpc: RpcClient,
}

impl PresaleProbe {
    /// Probe against `rpc_url` at confirmed commitment.
    pub fn new(rpc_url: String) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed()),
        }
    }

    /// Probe over a caller-configured client.
    pub fn from_client(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// Raw bytes of the account at `address`, or `None` when no account
    /// exists there.
    pub async fn fetch_raw(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ProbeError> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    /// Fetch and decode in one step. An absent account surfaces as
    /// [`crate::DecodeError::NotFound`] inside [`ProbeError::Decode`].
    pub async fn fetch_state(&self, address: &Pubkey) -> Result<PresaleState, ProbeError> {
        let raw = self.fetch_raw(address).await?;
        Ok(decode_account(raw.as_deref())?)
    }
}
