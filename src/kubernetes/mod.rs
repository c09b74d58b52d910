// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, CRD registration and dynamic resource access.

pub mod client;
pub mod crd;
pub mod dynamic;

pub use client::create_client;
pub use crd::{
    ensure_crds_created, ensure_default_crds_created, get_group_version_resource, CrdClient,
    CreateOutcome,
};
pub use dynamic::dynamic_api;
