use solana_program::pubkey::Pubkey;

// ─────────────────────────────────────────────────────────────────────────────
// PresaleState — one decoded snapshot of the on-chain presale account
// ─────────────────────────────────────────────────────────────────────────────

/// Decoded presale account state.
///
/// A `PresaleState` is built fresh from newly fetched bytes on every decode
/// and never mutated afterwards: the on-chain account may change between
/// fetches, so staleness is handled by re-fetching and re-decoding, not by
/// updating a cached value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresaleState {
    /// Authority that administers the presale.
    pub authority: Pubkey,

    /// Mint of the token being sold.
    pub token_mint: Pubkey,

    /// USDC payment mint accepted by the sale.
    pub usdc_mint: Pubkey,

    /// USDT payment mint accepted by the sale.
    pub usdt_mint: Pubkey,

    /// Unix timestamp when the VIP window opens (inclusive).
    pub vip_start: i64,

    /// Unix timestamp when the VIP window closes (inclusive).
    pub vip_end: i64,

    /// Number of VIP buyers recorded so far.
    pub vip_buyers_count: u64,

    /// VIP buyer capacity. Zero means the VIP tier is disabled.
    pub vip_max_buyers: u64,
}

/// Derived VIP-tier facts at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VipStatus {
    /// `now` lies inside the closed `[vip_start, vip_end]` window.
    pub open: bool,
    /// The buyer count has reached the capacity.
    pub full: bool,
}

impl PresaleState {
    /// Whether the VIP window is open at `now`. Both bounds are inclusive.
    ///
    /// An inverted window (`vip_start > vip_end`, as seen in uninitialized
    /// records) is treated as never open rather than as an error: this is
    /// read-only diagnostics, not a gate.
    pub fn vip_open(&self, now: i64) -> bool {
        self.vip_start <= now && now <= self.vip_end
    }

    /// Whether the VIP tier has reached capacity. A capacity of zero means
    /// the tier is disabled and reports full immediately.
    pub fn vip_full(&self) -> bool {
        self.vip_buyers_count >= self.vip_max_buyers
    }

    /// Both VIP facts at once.
    pub fn vip_status(&self, now: i64) -> VipStatus {
        VipStatus {
            open: self.vip_open(now),
            full: self.vip_full(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(vip_start: i64, vip_end: i64, buyers: u64, max: u64) -> PresaleState {
        PresaleState {
            authority: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            usdc_mint: Pubkey::new_unique(),
            usdt_mint: Pubkey::new_unique(),
            vip_start,
            vip_end,
            vip_buyers_count: buyers,
            vip_max_buyers: max,
        }
    }

    #[test]
    fn window_is_closed_interval() {
        let s = state(1_700_000_000, 1_700_003_600, 0, 100);
        assert!(!s.vip_open(1_699_999_999));
        assert!(s.vip_open(1_700_000_000));
        assert!(s.vip_open(1_700_001_000));
        assert!(s.vip_open(1_700_003_600));
        assert!(!s.vip_open(1_700_003_601));
    }

    #[test]
    fn open_window_with_spare_capacity() {
        let s = state(1_700_000_000, 1_700_003_600, 50, 100);
        let status = s.vip_status(1_700_001_000);
        assert!(status.open);
        assert!(!status.full);
    }

    #[test]
    fn cap_reached_regardless_of_time() {
        let s = state(1_700_000_000, 1_700_003_600, 100, 100);
        assert!(s.vip_full());
        assert!(s.vip_status(0).full);
        assert!(s.vip_status(1_700_001_000).full);
        assert!(s.vip_status(i64::MAX).full);
    }

    #[test]
    fn zero_capacity_means_disabled_tier() {
        assert!(state(0, 0, 0, 0).vip_full());
        assert!(state(0, 0, 42, 0).vip_full());
    }

    #[test]
    fn inverted_window_is_never_open() {
        let s = state(1_700_003_600, 1_700_000_000, 0, 100);
        for now in [
            i64::MIN,
            0,
            1_700_000_000,
            1_700_001_800,
            1_700_003_600,
            i64::MAX,
        ] {
            assert!(!s.vip_open(now), "inverted window open at {now}");
        }
    }

    #[test]
    fn negative_timestamps_are_representable() {
        let s = state(-100, 100, 0, 1);
        assert!(s.vip_open(0));
        assert!(s.vip_open(-100));
        assert!(!s.vip_open(-101));
    }
}
