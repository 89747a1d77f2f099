// SPDX-FileCopyrightText: © 2026 Kubvernor authors
// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2026 Kubvernor authors.
//         This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, version 3.
//         This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//         You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//

use gateway_api::apis::standard::{
    grpcroutes::{GRPCRouteRulesMatchesHeaders, GRPCRouteRulesMatchesHeadersType, GRPCRouteRulesMatchesMethod, GRPCRouteRulesMatchesMethodType},
    httproutes::{
        HTTPRouteRulesMatches, HTTPRouteRulesMatchesHeaders, HTTPRouteRulesMatchesHeadersType, HTTPRouteRulesMatchesPath,
        HTTPRouteRulesMatchesPathType, HTTPRouteRulesMatchesQueryParams, HTTPRouteRulesMatchesQueryParamsType,
    },
};
use tracing::trace;

pub fn build_path_match(path_type: HTTPRouteRulesMatchesPathType, value: &str) -> Vec<HTTPRouteRulesMatches> {
    trace!("Building {path_type:?} path match {value}");
    vec![HTTPRouteRulesMatches {
        path: Some(HTTPRouteRulesMatchesPath { r#type: Some(path_type), value: Some(value.to_owned()) }),
        ..Default::default()
    }]
}

pub fn build_header_match(match_type: HTTPRouteRulesMatchesHeadersType, name: &str, value: &str) -> Vec<HTTPRouteRulesMatchesHeaders> {
    trace!("Building {match_type:?} header match {name}={value}");
    vec![HTTPRouteRulesMatchesHeaders { r#type: Some(match_type), name: name.to_owned(), value: value.to_owned() }]
}

/// One exact match per pair, in the iteration order of `names_and_values`.
pub fn build_query_param_matches<K, V>(names_and_values: impl IntoIterator<Item = (K, V)>) -> Vec<HTTPRouteRulesMatchesQueryParams>
where
    K: Into<String>,
    V: Into<String>,
{
    names_and_values
        .into_iter()
        .map(|(name, value)| HTTPRouteRulesMatchesQueryParams {
            r#type: Some(HTTPRouteRulesMatchesQueryParamsType::Exact),
            name: name.into(),
            value: value.into(),
        })
        .collect()
}

pub fn build_grpc_method_match(match_type: GRPCRouteRulesMatchesMethodType, service: &str, method: &str) -> GRPCRouteRulesMatchesMethod {
    trace!("Building {match_type:?} gRPC method match {service}/{method}");
    GRPCRouteRulesMatchesMethod { r#type: Some(match_type), service: Some(service.to_owned()), method: Some(method.to_owned()) }
}

pub fn build_grpc_header_match(name: &str, value: &str) -> Vec<GRPCRouteRulesMatchesHeaders> {
    trace!("Building gRPC header match {name}={value}");
    vec![GRPCRouteRulesMatchesHeaders { r#type: Some(GRPCRouteRulesMatchesHeadersType::Exact), name: name.to_owned(), value: value.to_owned() }]
}
