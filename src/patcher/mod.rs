// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Text patching of generated CRD files.

pub mod file;
pub mod scan;

pub use file::{fix_claims, PatchOutcome};
pub use scan::{indentation, patch_claims, Insertion, PatchedDocument};
