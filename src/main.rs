// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::Api;
use tracing::info;

use galaxy_crd::config::Config;
use galaxy_crd::error::GalaxyError;
use galaxy_crd::kubernetes::{create_client, ensure_default_crds_created};
use galaxy_crd::registry::definitions;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    if config.print_only {
        for definition in definitions() {
            let manifest = serde_yaml::to_string(&definition.to_crd())
                .with_context(|| format!("Failed to render CRD {}", definition.name))?;
            println!("---\n{}", manifest);
        }
        return Ok(());
    }

    info!("Ensuring galaxy IPAM CRDs exist");

    let client = create_client(&config).await?;
    let crds: Api<CustomResourceDefinition> = Api::all(client);

    // The create calls carry no deadline of their own
    tokio::time::timeout(config.create_timeout, ensure_default_crds_created(&crds))
        .await
        .map_err(|_| GalaxyError::Timeout(config.create_timeout.as_secs()))??;

    info!("All galaxy IPAM CRDs are registered");
    Ok(())
}
