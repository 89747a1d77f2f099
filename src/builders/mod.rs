// SPDX-FileCopyrightText: © 2026 Kubvernor authors
// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2026 Kubvernor authors.
//         This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, version 3.
//         This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//         You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//

//! Factories for schema-complete references and match predicates.
//!
//! Builders never validate their input. They apply the schema defaults and materialize an optional
//! field only when the caller supplied a value for it.

mod backends;
mod matches;
mod references;

#[cfg(feature = "experimental")]
pub use backends::build_tls_route_backend;
pub use backends::{build_grpc_route_backend, build_weighted_service_backend, concat_backend_references};
pub use matches::{build_grpc_header_match, build_grpc_method_match, build_header_match, build_path_match, build_query_param_matches};
pub use references::{
    build_gateway_listener_parent_reference, build_gateway_parent_reference, build_secret_reference, build_service_backend_reference,
};
