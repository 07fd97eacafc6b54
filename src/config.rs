// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_CRD_PATH;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Patcher configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// CRD file patched in place
    pub crd_path: PathBuf,
    /// Compute the patch without writing it back
    pub dry_run: bool,
    /// Parse the patched CRD and check every claims array before writing
    pub verify: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let crd_path = env::var_os("CRD_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CRD_PATH));
        let dry_run = parse_flag(env::var("DRY_RUN").ok());
        let verify = parse_flag(env::var("VERIFY_CRD").ok());

        Ok(Config {
            crd_path,
            dry_run,
            verify,
        })
    }

    /// Configuration for patching `path` in place with no extra checks
    #[cfg(test)]
    pub(crate) fn for_path(path: impl Into<PathBuf>) -> Self {
        Config {
            crd_path: path.into(),
            dry_run: false,
            verify: false,
        }
    }
}

/// Anything other than a parseable `true` is treated as `false`
fn parse_flag(value: Option<String>) -> bool {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_true() {
        assert!(parse_flag(Some("true".to_string())));
        assert!(parse_flag(Some(" true ".to_string())));
    }

    #[test]
    fn test_parse_flag_false_and_garbage() {
        assert!(!parse_flag(Some("false".to_string())));
        assert!(!parse_flag(Some("yes".to_string())));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_from_env_reads_and_defaults() {
        env::set_var("CRD_PATH", "/tmp/crds/vectorsidecars.yaml");
        env::set_var("DRY_RUN", "true");
        env::set_var("VERIFY_CRD", "true");

        let config = Config::from_env().unwrap();
        assert_eq!(config.crd_path, PathBuf::from("/tmp/crds/vectorsidecars.yaml"));
        assert!(config.dry_run);
        assert!(config.verify);

        env::set_var("DRY_RUN", "nope");
        env::remove_var("CRD_PATH");
        env::remove_var("VERIFY_CRD");

        let config = Config::from_env().unwrap();
        assert_eq!(config.crd_path, PathBuf::from(DEFAULT_CRD_PATH));
        assert!(!config.dry_run);
        assert!(!config.verify);

        env::remove_var("DRY_RUN");
    }

    #[test]
    fn test_for_path_defaults() {
        let config = Config::for_path("crd.yaml");
        assert_eq!(config.crd_path, PathBuf::from("crd.yaml"));
        assert!(!config.dry_run);
        assert!(!config.verify);
    }
}
