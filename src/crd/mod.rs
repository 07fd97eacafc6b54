// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD parsing for post-patch verification.

pub mod verify;

pub use verify::{find_unpatched_claims, verify_claims};
