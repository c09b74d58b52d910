// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The custom resource types the galaxy IPAM needs registered.

use crate::constants::{GROUP_NAME, VERSION};
use crate::types::{ResourceDefinition, Scope};

/// Cluster-wide floating IP allocations
pub const FLOATING_IP: ResourceDefinition = ResourceDefinition {
    name: "floatingips.galaxy.k8s.io",
    group: GROUP_NAME,
    version: VERSION,
    scope: Scope::Cluster,
    kind: "FloatingIP",
    plural: "floatingips",
    short_names: &["fip"],
};

/// Per-namespace IP pools
pub const POOL: ResourceDefinition = ResourceDefinition {
    name: "pools.galaxy.k8s.io",
    group: GROUP_NAME,
    version: VERSION,
    scope: Scope::Namespaced,
    kind: "Pool",
    plural: "pools",
    short_names: &[],
};

/// All definitions in the order they are created
pub fn definitions() -> [ResourceDefinition; 2] {
    [FLOATING_IP, POOL]
}
