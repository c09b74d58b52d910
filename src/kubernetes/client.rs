// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::config::Config;
use crate::error::{GalaxyError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{info, instrument};

/// Create a client from the configured kubeconfig, or the inferred default
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match &config.kubeconfig {
        Some(path) => create_client_from_kubeconfig(path).await,
        None => {
            let c = KConfig::infer().await.map_err(|e| {
                GalaxyError::KubeconfigError(format!("Failed to infer config: {}", e))
            })?;
            info!("Using inferred cluster config for {}", c.cluster_url);
            Client::try_from(c).map_err(|e| {
                GalaxyError::KubeconfigError(format!("Failed to create client: {}", e))
            })
        }
    }
}

/// Create a client from a kubeconfig file
async fn create_client_from_kubeconfig(path: &Path) -> Result<Client> {
    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        GalaxyError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    let client_config = KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| GalaxyError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| GalaxyError::KubeconfigError(format!("Failed to create client: {}", e)))
}
