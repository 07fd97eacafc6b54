// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read, patch, and rewrite a CRD file in place

use crate::config::Config;
use crate::crd::verify_claims;
use crate::error::{PatcherError, Result};
use crate::patcher::scan::{patch_claims, Insertion};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// What a single run did to the CRD file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub insertions: Vec<Insertion>,
    /// False in dry-run mode
    pub written: bool,
}

/// Patch the configured CRD file.
///
/// The whole file is read before anything is written, and the file is
/// rewritten in full (truncate then write) even when nothing changed.
#[instrument(skip(config), fields(path = %config.crd_path.display()))]
pub fn fix_claims(config: &Config) -> Result<PatchOutcome> {
    let path = &config.crd_path;

    let content = fs::read_to_string(path).map_err(|e| {
        PatcherError::ReadError(format!("{}: {}", path.display(), e))
    })?;

    let patched = patch_claims(&content);
    for insertion in &patched.insertions {
        debug!(
            "Adding atomic map type after line {} (indent {})",
            insertion.line, insertion.indent
        );
    }
    if patched.is_changed() {
        info!("Found {} claims items to annotate", patched.insertions.len());
    } else {
        info!("All claims items already annotated");
    }

    if config.verify {
        verify_claims(&patched.content)?;
        info!("Verified all claims schemas are atomic");
    }

    if config.dry_run {
        info!("Dry run, leaving {} untouched", path.display());
        return Ok(PatchOutcome {
            path: path.clone(),
            insertions: patched.insertions,
            written: false,
        });
    }

    fs::write(path, &patched.content).map_err(|e| {
        PatcherError::WriteError(format!("{}: {}", path.display(), e))
    })?;

    Ok(PatchOutcome {
        path: path.clone(),
        insertions: patched.insertions,
        written: true,
    })
}
