// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatcherError {
    #[error("Failed to read CRD: {0}")]
    ReadError(String),

    #[error("Failed to write CRD: {0}")]
    WriteError(String),

    #[error("Failed to parse CRD: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Claims left without atomic map type: {0}")]
    VerificationError(String),
}

pub type Result<T> = std::result::Result<T, PatcherError>;
