// SPDX-FileCopyrightText: © 2026 Kubvernor authors
// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2026 Kubvernor authors.
//         This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, version 3.
//         This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//         You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//

use tracing::debug;

use crate::common::{ParentReference, ResourceKey, DEFAULT_GROUP_NAME, GATEWAY_KIND_NAME};

/// Decides whether parent references point at one gateway.
///
/// Group, kind and namespace are defaulting fields: when absent they take the canonical value, so only
/// a present and different value rules a reference out. The name is always compared. Section name and
/// port are ignored, a reference to a listener of the gateway is a reference to the gateway.
pub struct ParentRefMatcher<'a> {
    gateway_key: &'a ResourceKey,
}

impl<'a> ParentRefMatcher<'a> {
    pub fn new(gateway_key: &'a ResourceKey) -> Self {
        Self { gateway_key }
    }

    pub fn matches(&self, parent_ref: &ParentReference) -> bool {
        if let Some(group) = &parent_ref.group {
            if group != DEFAULT_GROUP_NAME {
                debug!("Parent {} group {group} doesn't match {}", parent_ref.name, self.gateway_key);
                return false;
            }
        }

        if let Some(kind) = &parent_ref.kind {
            if kind != GATEWAY_KIND_NAME {
                debug!("Parent {} kind {kind} doesn't match {}", parent_ref.name, self.gateway_key);
                return false;
            }
        }

        if let Some(namespace) = &parent_ref.namespace {
            if *namespace != self.gateway_key.namespace {
                debug!("Parent {} namespace {namespace} doesn't match {}", parent_ref.name, self.gateway_key);
                return false;
            }
        }

        parent_ref.name == self.gateway_key.name
    }

    pub fn filter_matching<'p>(&self, parent_refs: impl IntoIterator<Item = &'p ParentReference>) -> Vec<&'p ParentReference> {
        parent_refs.into_iter().filter(|parent_ref| self.matches(parent_ref)).collect()
    }
}

pub fn matches_gateway(parent_ref: &ParentReference, gateway_key: &ResourceKey) -> bool {
    ParentRefMatcher::new(gateway_key).matches(parent_ref)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{build_gateway_listener_parent_reference, build_gateway_parent_reference};

    fn init_logging() {
        let _ = tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).with_test_writer().try_init();
    }

    fn gateway_key() -> ResourceKey {
        ResourceKey::namespaced("gw", "ns")
    }

    #[test]
    fn bare_name_matches() {
        assert!(matches_gateway(&ParentReference::builder().name("gw").build(), &gateway_key()));
    }

    #[test]
    fn section_name_and_port_are_ignored() {
        let parent_ref = ParentReference::builder().name("gw").namespace("ns").section_name("http").build();
        assert!(matches_gateway(&parent_ref, &gateway_key()));
        let parent_ref = ParentReference::builder().name("gw").section_name("https").port(443).build();
        assert!(matches_gateway(&parent_ref, &gateway_key()));
    }

    #[test]
    fn namespace_mismatch() {
        let parent_ref = ParentReference::builder().name("gw").namespace("other-ns").build();
        assert!(!matches_gateway(&parent_ref, &gateway_key()));
    }

    #[test]
    fn name_mismatch() {
        assert!(!matches_gateway(&ParentReference::builder().name("other-gw").build(), &gateway_key()));
    }

    #[test]
    fn kind_must_be_gateway() {
        init_logging();
        for kind in ["Service", "gateway", "GatewayClass", ""] {
            let parent_ref = ParentReference::builder().name("gw").namespace("ns").kind(kind).build();
            assert!(!matches_gateway(&parent_ref, &gateway_key()), "kind {kind:?}");
        }
        let parent_ref = ParentReference::builder().name("gw").kind("Gateway").build();
        assert!(matches_gateway(&parent_ref, &gateway_key()));
    }

    #[test]
    fn group_must_be_gateway_api() {
        let parent_ref = ParentReference::builder().name("gw").group("").build();
        assert!(!matches_gateway(&parent_ref, &gateway_key()));
        let parent_ref = ParentReference::builder().name("gw").group("policy.linkerd.io").build();
        assert!(!matches_gateway(&parent_ref, &gateway_key()));
        let parent_ref = ParentReference::builder().name("gw").group("gateway.networking.k8s.io").build();
        assert!(matches_gateway(&parent_ref, &gateway_key()));
    }

    #[test]
    fn built_references_match() {
        assert!(matches_gateway(&build_gateway_parent_reference("ns", "gw"), &gateway_key()));
        assert!(matches_gateway(&build_gateway_parent_reference("", "gw"), &gateway_key()));
        assert!(matches_gateway(&build_gateway_listener_parent_reference("ns", "gw", "http", 80), &gateway_key()));
        assert!(!matches_gateway(&build_gateway_listener_parent_reference("other-ns", "gw", "http", 80), &gateway_key()));
    }

    #[test]
    fn filter_matching_keeps_order() {
        init_logging();
        let parent_refs = vec![
            build_gateway_listener_parent_reference("ns", "gw", "https", 0),
            build_gateway_parent_reference("ns", "other-gw"),
            build_gateway_listener_parent_reference("ns", "gw", "http", 0),
        ];
        let key = gateway_key();
        let matched = ParentRefMatcher::new(&key).filter_matching(&parent_refs);
        let sections: Vec<_> = matched.iter().map(|parent_ref| parent_ref.section_name.as_deref()).collect();
        assert_eq!(sections, vec![Some("https"), Some("http")]);
    }
}
