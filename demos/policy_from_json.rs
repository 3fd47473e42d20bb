//! Loading a shrink policy from JSON
//!
//! Usage: `cargo run --example policy_from_json -- [path/to/policy.json]`
//!
//! Without an argument a built-in policy document is used.

use anyhow::{Context, Result};
use segdeque::{SegmentedDeque, ShrinkPolicy};

const DEFAULT_DOCUMENT: &str = r#"{
    "directory_slack": 4.0,
    "pool_retain_divisor": 2
}"#;

fn load_policy() -> Result<ShrinkPolicy> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read policy file {path}"))?,
        None => DEFAULT_DOCUMENT.to_string(),
    };
    let policy: ShrinkPolicy = serde_json::from_str(&text).context("malformed policy document")?;
    policy.validate().context("policy rejected")?;
    Ok(policy)
}

fn main() -> Result<()> {
    let policy = load_policy()?;
    println!("Policy: {}", serde_json::to_string_pretty(&policy)?);

    let mut dq: SegmentedDeque<u64, 16> = SegmentedDeque::with_policy(policy)?;
    dq.extend(0..4096);
    println!(
        "filled:    len {:>5}, segments {:>3}, directory {:>3}, pooled {:>3}",
        dq.len(),
        dq.segment_count(),
        dq.directory_capacity(),
        dq.pooled_segments()
    );

    for keep in [2048, 512, 64, 0] {
        dq.truncate(keep);
        println!(
            "truncated: len {:>5}, segments {:>3}, directory {:>3}, pooled {:>3}",
            dq.len(),
            dq.segment_count(),
            dq.directory_capacity(),
            dq.pooled_segments()
        );
    }

    Ok(())
}
