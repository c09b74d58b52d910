// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::crd::CREATE_TIMEOUT_SECS;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit kubeconfig file; the inferred client config is used when unset
    pub kubeconfig: Option<PathBuf>,
    /// Deadline for creating all CRDs
    pub create_timeout: Duration,
    /// Print the CRD manifests instead of creating them
    pub print_only: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kubeconfig = lookup("GALAXY_KUBECONFIG")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let create_timeout_secs = match lookup("CRD_CREATE_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("CRD_CREATE_TIMEOUT_SECS is not a number: {}", v))?,
            None => CREATE_TIMEOUT_SECS,
        };

        let print_only: bool = lookup("PRINT_CRDS")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            kubeconfig,
            create_timeout: Duration::from_secs(create_timeout_secs),
            print_only,
        })
    }
}
