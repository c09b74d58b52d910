// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD registration

use crate::constants::OPERATOR_NAME;
use crate::error::{GalaxyError, Result};
use crate::registry;
use crate::types::{GroupVersionResource, ResourceDefinition};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{api::PostParams, Api};
use std::future::Future;
use tracing::{debug, error, info, instrument};

/// Result of a single create call
#[derive(Debug)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
    Failed(GalaxyError),
}

/// Anything that can create CRDs in a control plane
pub trait CrdClient {
    fn create_definition(
        &self,
        definition: &ResourceDefinition,
    ) -> impl Future<Output = CreateOutcome> + Send;
}

impl CrdClient for Api<CustomResourceDefinition> {
    fn create_definition(
        &self,
        definition: &ResourceDefinition,
    ) -> impl Future<Output = CreateOutcome> + Send {
        let crd = definition.to_crd();
        let pp = PostParams {
            field_manager: Some(OPERATOR_NAME.to_string()),
            ..Default::default()
        };

        async move {
            match self.create(&pp, &crd).await {
                Ok(_) => CreateOutcome::Created,
                Err(kube::Error::Api(err)) if err.code == 409 && err.reason == "AlreadyExists" => {
                    CreateOutcome::AlreadyExists
                }
                Err(e) => CreateOutcome::Failed(e.into()),
            }
        }
    }
}

/// Create each definition in order, treating "already exists" as success.
/// Stops at the first other failure and returns it; later definitions are not attempted.
#[instrument(skip(client, definitions))]
pub async fn ensure_crds_created<C: CrdClient>(
    client: &C,
    definitions: &[ResourceDefinition],
) -> Result<()> {
    for definition in definitions {
        match client.create_definition(definition).await {
            CreateOutcome::Created => {}
            CreateOutcome::AlreadyExists => {
                debug!("CRD {} already exists", definition.name);
            }
            CreateOutcome::Failed(e) => {
                error!("Error creating CRD: {}", definition.kind);
                return Err(e);
            }
        }
        info!("Create CRD {} successfully.", definition.kind);
    }

    Ok(())
}

/// Ensure the FloatingIP and Pool CRDs exist
pub async fn ensure_default_crds_created<C: CrdClient>(client: &C) -> Result<()> {
    ensure_crds_created(client, &registry::definitions()).await
}

/// Group, version and plural resource name used to address instances of `definition`
pub fn get_group_version_resource(definition: &ResourceDefinition) -> GroupVersionResource {
    definition.group_version_resource()
}
