// SPDX-FileCopyrightText: © 2026 Kubvernor authors
// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2026 Kubvernor authors.
//         This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, version 3.
//         This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//         You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//

use gateway_api::apis::standard::{gateways::GatewayListenersTlsCertificateRefs, httproutes::HTTPRouteRulesBackendRefs};
use tracing::trace;

use crate::common::{ParentReference, CORE_GROUP_NAME, DEFAULT_GROUP_NAME, GATEWAY_KIND_NAME, SECRET_KIND_NAME, SERVICE_KIND_NAME};

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Reference to a core `Secret`. An empty `namespace` leaves the field out.
pub fn build_secret_reference(name: &str, namespace: &str) -> GatewayListenersTlsCertificateRefs {
    trace!("Building secret reference {namespace}/{name}");
    GatewayListenersTlsCertificateRefs {
        group: Some(CORE_GROUP_NAME.to_owned()),
        kind: Some(SECRET_KIND_NAME.to_owned()),
        name: name.to_owned(),
        namespace: non_empty(namespace),
    }
}

pub fn build_gateway_parent_reference(namespace: &str, name: &str) -> ParentReference {
    trace!("Building gateway parent reference {namespace}/{name}");
    ParentReference {
        group: Some(DEFAULT_GROUP_NAME.to_owned()),
        kind: Some(GATEWAY_KIND_NAME.to_owned()),
        namespace: non_empty(namespace),
        name: name.to_owned(),
        section_name: None,
        port: None,
    }
}

/// Parent reference narrowed to a listener. `listener` and `port` are checked independently, so a
/// caller can pin the section name, the port, both or neither.
pub fn build_gateway_listener_parent_reference(namespace: &str, name: &str, listener: &str, port: i32) -> ParentReference {
    let mut parent_ref = build_gateway_parent_reference(namespace, name);
    parent_ref.section_name = non_empty(listener);
    if port != 0 {
        parent_ref.port = Some(port);
    }
    parent_ref
}

/// Reference to a core `Service`. The port is always set, whatever its value.
/// Unweighted reference to a core `Service`. The weighted route backends start from this value.
pub fn build_service_backend_reference(name: &str, port: i32) -> HTTPRouteRulesBackendRefs {
    trace!("Building service backend reference {name}:{port}");
    HTTPRouteRulesBackendRefs {
        group: Some(CORE_GROUP_NAME.to_owned()),
        kind: Some(SERVICE_KIND_NAME.to_owned()),
        name: name.to_owned(),
        port: Some(port),
        ..Default::default()
    }
}
