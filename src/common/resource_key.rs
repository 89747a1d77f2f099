// SPDX-FileCopyrightText: © 2026 Kubvernor authors
// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2026 Kubvernor authors.
//         This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, version 3.
//         This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//         You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//

use std::fmt::Display;

use gateway_api::apis::standard::gateways::Gateway;
use kube::ResourceExt;

use super::{ParentReference, DEFAULT_GROUP_NAME, DEFAULT_NAMESPACE_NAME, GATEWAY_KIND_NAME};

/// Namespace and name of a resource.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ResourceKey {
    pub namespace: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_owned(), ..Default::default() }
    }

    pub fn namespaced(name: &str, namespace: &str) -> Self {
        Self { name: name.to_owned(), namespace: namespace.to_owned() }
    }
}

impl Default for ResourceKey {
    fn default() -> Self {
        Self { namespace: DEFAULT_NAMESPACE_NAME.to_owned(), name: String::default() }
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

impl From<&Gateway> for ResourceKey {
    fn from(gateway: &Gateway) -> Self {
        Self { namespace: gateway.namespace().unwrap_or(DEFAULT_NAMESPACE_NAME.to_owned()), name: gateway.name_any() }
    }
}

/// Parent reference with every defaulting field filled in.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RouteRefKey {
    pub group: String,
    pub kind: String,
    pub resource_key: ResourceKey,
    pub section_name: Option<String>,
    pub port: Option<i32>,
}

impl AsRef<ResourceKey> for RouteRefKey {
    fn as_ref(&self) -> &ResourceKey {
        &self.resource_key
    }
}

impl ParentReference {
    /// Applies the schema defaults: the gateway API group, the `Gateway` kind and the namespace of the
    /// referencing route. Listener qualifiers stay as they are.
    pub fn resolve(&self, route_namespace: &str) -> RouteRefKey {
        RouteRefKey {
            group: self.group.clone().unwrap_or(DEFAULT_GROUP_NAME.to_owned()),
            kind: self.kind.clone().unwrap_or(GATEWAY_KIND_NAME.to_owned()),
            resource_key: ResourceKey {
                namespace: self.namespace.clone().unwrap_or(route_namespace.to_owned()),
                name: self.name.clone(),
            },
            section_name: self.section_name.clone(),
            port: self.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fills_defaults() {
        let parent_ref = ParentReference::builder().name("gw").section_name("http").build();
        let key = parent_ref.resolve("routes");
        assert_eq!(key.group, DEFAULT_GROUP_NAME);
        assert_eq!(key.kind, GATEWAY_KIND_NAME);
        assert_eq!(key.resource_key, ResourceKey::namespaced("gw", "routes"));
        assert_eq!(key.section_name.as_deref(), Some("http"));
        assert_eq!(key.port, None);
    }

    #[test]
    fn resolve_keeps_explicit_fields() {
        let parent_ref = ParentReference::builder().group("example.com").kind("Mesh").namespace("infra").name("gw").port(8080).build();
        let key = parent_ref.resolve("routes");
        assert_eq!(key.group, "example.com");
        assert_eq!(key.kind, "Mesh");
        assert_eq!(key.as_ref(), &ResourceKey::namespaced("gw", "infra"));
        assert_eq!(key.port, Some(8080));
    }

    fn gateway(metadata: &str) -> Gateway {
        let yaml = format!(
            r"
apiVersion: gateway.networking.k8s.io/v1
kind: Gateway
metadata:
{metadata}
spec:
  gatewayClassName: kubvernor
  listeners:
  - name: http
    port: 80
    protocol: HTTP
"
        );
        serde_yaml::from_str(&yaml).unwrap()
    }

    #[test]
    fn gateway_key() {
        let infra_gateway = gateway("  name: gw\n  namespace: infra");
        assert_eq!(ResourceKey::from(&infra_gateway), ResourceKey::namespaced("gw", "infra"));

        let key = ResourceKey::from(&gateway("  name: gw"));
        assert_eq!(key, ResourceKey::new("gw"));
        assert_eq!(key.to_string(), "default.gw");
    }
}
