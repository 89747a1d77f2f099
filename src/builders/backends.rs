// SPDX-FileCopyrightText: © 2026 Kubvernor authors
// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2026 Kubvernor authors.
//         This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, version 3.
//         This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//         You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//

#[cfg(feature = "experimental")]
use gateway_api::apis::experimental::tlsroutes::TLSRouteRulesBackendRefs;
use gateway_api::apis::standard::{grpcroutes::GRPCRouteRulesBackendRefs, httproutes::HTTPRouteRulesBackendRefs};
use tracing::trace;

use super::build_service_backend_reference;

pub fn concat_backend_references<T>(backend_refs: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    backend_refs.into_iter().flatten().collect()
}

pub fn build_weighted_service_backend(name: &str, port: i32, weight: i32) -> Vec<HTTPRouteRulesBackendRefs> {
    trace!("Building HTTP backend {name}:{port} weight {weight}");
    vec![HTTPRouteRulesBackendRefs { weight: Some(weight), ..build_service_backend_reference(name, port) }]
}

/// TLS route backend. A `None` weight stays absent on the wire and is not the same as a zero weight.
#[cfg(feature = "experimental")]
pub fn build_tls_route_backend(name: &str, port: i32, weight: Option<i32>) -> Vec<TLSRouteRulesBackendRefs> {
    trace!("Building TLS backend {name}:{port} weight {weight:?}");
    let HTTPRouteRulesBackendRefs { group, kind, name, namespace, port, .. } = build_service_backend_reference(name, port);
    vec![TLSRouteRulesBackendRefs { group, kind, name, namespace, port, weight }]
}

pub fn build_grpc_route_backend(name: &str, port: i32, weight: i32) -> Vec<GRPCRouteRulesBackendRefs> {
    trace!("Building gRPC backend {name}:{port} weight {weight}");
    let HTTPRouteRulesBackendRefs { group, kind, name, namespace, port, .. } = build_service_backend_reference(name, port);
    vec![GRPCRouteRulesBackendRefs { filters: None, group, kind, name, namespace, port, weight: Some(weight) }]
}
