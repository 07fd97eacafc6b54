// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;

use claims_patcher::config::Config;
use claims_patcher::patcher::fix_claims;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting CRD claims patcher");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: crd_path={}, dry_run={}, verify={}",
        config.crd_path.display(),
        config.dry_run,
        config.verify
    );

    let outcome = fix_claims(&config)?;

    if outcome.written {
        println!("Fixed CRD: {}", outcome.path.display());
    } else {
        println!(
            "Would fix CRD: {} ({} insertions)",
            outcome.path.display(),
            outcome.insertions.len()
        );
    }
    Ok(())
}
