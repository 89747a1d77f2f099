// SPDX-FileCopyrightText: © 2026 Kubvernor authors
// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2026 Kubvernor authors.
//         This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, version 3.
//         This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//         You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//

//! Conversions between [`ParentReference`] and the parent reference types generated by the
//! `gateway-api` crate, so references read from live route objects can go through the matcher.

#[cfg(feature = "experimental")]
use gateway_api::apis::experimental::tlsroutes::TLSRouteParentRefs;
use gateway_api::apis::standard::{grpcroutes::GRPCRouteParentRefs, httproutes::HTTPRouteParentRefs};

use crate::common::ParentReference;

macro_rules! parent_refs_conversions {
    ($parent_refs:ty) => {
        impl From<&$parent_refs> for ParentReference {
            fn from(parent_ref: &$parent_refs) -> Self {
                Self {
                    group: parent_ref.group.clone(),
                    kind: parent_ref.kind.clone(),
                    namespace: parent_ref.namespace.clone(),
                    name: parent_ref.name.clone(),
                    section_name: parent_ref.section_name.clone(),
                    port: parent_ref.port,
                }
            }
        }

        impl From<ParentReference> for $parent_refs {
            fn from(parent_ref: ParentReference) -> Self {
                Self {
                    group: parent_ref.group,
                    kind: parent_ref.kind,
                    namespace: parent_ref.namespace,
                    name: parent_ref.name,
                    section_name: parent_ref.section_name,
                    port: parent_ref.port,
                }
            }
        }
    };
}

parent_refs_conversions!(HTTPRouteParentRefs);
parent_refs_conversions!(GRPCRouteParentRefs);
#[cfg(feature = "experimental")]
parent_refs_conversions!(TLSRouteParentRefs);
