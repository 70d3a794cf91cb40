//! Plain-text rendering of derived presale facts.
//!
//! Pure string building; printing is the caller's job.

use std::fmt::Write;

use solana_program::pubkey::Pubkey;

use crate::state::PresaleState;

/// Mint addresses the operator expects the presale to reference. Any field
/// left `None` is skipped by the comparison.
#[derive(Debug, Default, Clone)]
pub struct MintExpectations {
    pub token: Option<Pubkey>,
    pub usdc: Option<Pubkey>,
    pub usdt: Option<Pubkey>,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// VIP window and capacity report, evaluated at `now` (Unix seconds).
pub fn render_report(state: &PresaleState, now: i64) -> String {
    let status = state.vip_status(now);

    let mut out = String::new();
    let _ = writeln!(out, "=== Presale VIP Window ===");
    let _ = writeln!(out, "VIP start:       {}", state.vip_start);
    let _ = writeln!(out, "VIP end:         {}", state.vip_end);
    let _ = writeln!(out, "Now:             {now}");
    let _ = writeln!(out, "VIP window open: {}", yes_no(status.open));
    let _ = writeln!(
        out,
        "VIP buyers:      {} / {}",
        state.vip_buyers_count, state.vip_max_buyers
    );
    let _ = writeln!(out, "VIP tier full:   {}", yes_no(status.full));
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Presale Token Mints ===");
    let _ = writeln!(out, "Authority:  {}", state.authority);
    let _ = writeln!(out, "Token mint: {}", state.token_mint);
    let _ = writeln!(out, "USDC mint:  {}", state.usdc_mint);
    let _ = writeln!(out, "USDT mint:  {}", state.usdt_mint);
    out
}

/// Expected-vs-actual mint comparison, one line per configured expectation.
pub fn render_mint_check(state: &PresaleState, expected: &MintExpectations) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Mint Check ===");
    for (name, actual, want) in [
        ("token", &state.token_mint, expected.token),
        ("usdc", &state.usdc_mint, expected.usdc),
        ("usdt", &state.usdt_mint, expected.usdt),
    ] {
        if let Some(want) = want {
            let verdict = if *actual == want { "match" } else { "MISMATCH" };
            let _ = writeln!(out, "{name}: {actual} expected {want} -> {verdict}");
        }
    }
    out
}
