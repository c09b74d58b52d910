// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource definition descriptors and the identifiers derived from them.

pub mod definition;

pub use definition::{GroupVersionResource, ResourceDefinition, Scope};
