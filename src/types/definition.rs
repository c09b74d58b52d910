// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionNames, CustomResourceDefinitionSpec,
    CustomResourceDefinitionVersion, CustomResourceValidation, JSONSchemaProps,
};
use kube::{
    api::ObjectMeta,
    core::{ApiResource, GroupVersionKind},
};
use std::fmt;

/// Whether instances of a resource live inside a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Cluster,
    Namespaced,
}

impl Scope {
    /// Value used for `spec.scope` in a CustomResourceDefinition
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Cluster => "Cluster",
            Scope::Namespaced => "Namespaced",
        }
    }
}

/// Static description of a custom resource type to register with the API server.
///
/// `name` is expected to be `<plural>.<group>`; nothing checks this at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDefinition {
    pub name: &'static str,
    pub group: &'static str,
    pub version: &'static str,
    pub scope: Scope,
    pub kind: &'static str,
    pub plural: &'static str,
    pub short_names: &'static [&'static str],
}

/// Identifies an API resource for dynamic clients
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersionResource {
    pub group: String,
    pub version: String,
    pub resource: String,
}

impl fmt::Display for GroupVersionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.version, self.resource)
    }
}

impl ResourceDefinition {
    /// The CRD name this definition should carry by convention
    pub fn conventional_name(&self) -> String {
        format!("{}.{}", self.plural, self.group)
    }

    pub fn group_version_resource(&self) -> GroupVersionResource {
        GroupVersionResource {
            group: self.group.to_string(),
            version: self.version.to_string(),
            resource: self.plural.to_string(),
        }
    }

    /// Describe the resource for `kube`'s dynamic `Api<DynamicObject>`
    pub fn api_resource(&self) -> ApiResource {
        ApiResource::from_gvk_with_plural(
            &GroupVersionKind::gvk(self.group, self.version, self.kind),
            self.plural,
        )
    }

    /// Render as an `apiextensions.k8s.io/v1` CustomResourceDefinition.
    ///
    /// The single version accepts any object body; instances are not validated.
    pub fn to_crd(&self) -> CustomResourceDefinition {
        let short_names = if self.short_names.is_empty() {
            None
        } else {
            Some(self.short_names.iter().map(|s| s.to_string()).collect())
        };

        CustomResourceDefinition {
            metadata: ObjectMeta {
                name: Some(self.name.to_string()),
                ..Default::default()
            },
            spec: CustomResourceDefinitionSpec {
                group: self.group.to_string(),
                names: CustomResourceDefinitionNames {
                    kind: self.kind.to_string(),
                    plural: self.plural.to_string(),
                    short_names,
                    ..Default::default()
                },
                scope: self.scope.as_str().to_string(),
                versions: vec![CustomResourceDefinitionVersion {
                    name: self.version.to_string(),
                    served: true,
                    storage: true,
                    schema: Some(CustomResourceValidation {
                        open_api_v3_schema: Some(JSONSchemaProps {
                            type_: Some("object".to_string()),
                            x_kubernetes_preserve_unknown_fields: Some(true),
                            ..Default::default()
                        }),
                    }),
                    ..Default::default()
                }],
                ..Default::default()
            },
            status: None,
        }
    }
}
