// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group shared by all galaxy IPAM resources
pub const GROUP_NAME: &str = "galaxy.k8s.io";

/// API version served for the galaxy IPAM resources
pub const VERSION: &str = "v1alpha1";

/// Field manager name sent with create requests
pub const OPERATOR_NAME: &str = "galaxy-ipam";

/// CRD creation defaults
pub mod crd {
    /// Default deadline in seconds for ensuring all CRDs exist
    pub const CREATE_TIMEOUT_SECS: u64 = 30;
}
