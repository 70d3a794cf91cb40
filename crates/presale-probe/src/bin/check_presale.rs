//! One-shot presale diagnostic: fetch the account, decode it, evaluate the
//! VIP window at the current time and print the report.
//!
//! Usage: `check-presale <RPC_URL> <PRESALE_ADDRESS>`, or
//! `check-presale <PRESALE_ADDRESS>` with the URL in `PRESALE_RPC_URL`.

use std::env;
use std::process;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use solana_program::pubkey::Pubkey;

use presale_probe::{report, PresaleProbe};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let (rpc_url, address) = match (args.next(), args.next()) {
        (Some(url), Some(address)) => (url, address),
        (Some(address), None) => {
            let url = env::var("PRESALE_RPC_URL")
                .context("no RPC URL given and PRESALE_RPC_URL is not set")?;
            (url, address)
        }
        _ => bail!("usage: check-presale <RPC_URL> <PRESALE_ADDRESS>"),
    };

    let address = Pubkey::from_str(&address)
        .with_context(|| format!("invalid presale address: {address}"))?;

    let probe = PresaleProbe::new(rpc_url);
    let state = probe.fetch_state(&address).await?;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before the Unix epoch")?
        .as_secs() as i64;

    print!("{}", report::render_report(&state, now));
    Ok(())
}
