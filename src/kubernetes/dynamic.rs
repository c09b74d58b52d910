// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Untyped access to instances of the registered resources

use crate::types::{ResourceDefinition, Scope};
use kube::{api::DynamicObject, Api, Client};

/// Build an `Api<DynamicObject>` for instances of `definition`.
///
/// Cluster-scoped resources ignore `namespace`. Namespaced resources span all
/// namespaces when no namespace is given.
pub fn dynamic_api(
    client: Client,
    definition: &ResourceDefinition,
    namespace: Option<&str>,
) -> Api<DynamicObject> {
    let ar = definition.api_resource();
    match (definition.scope, namespace) {
        (Scope::Namespaced, Some(ns)) => Api::namespaced_with(client, ns, &ar),
        _ => Api::all_with(client, &ar),
    }
}
