// SPDX-FileCopyrightText: © 2026 Kubvernor authors
// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2026 Kubvernor authors.
//         This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, version 3.
//         This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//         You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//

mod references;
mod resource_key;

pub use references::ParentReference;
pub use resource_key::{ResourceKey, RouteRefKey};

pub const DEFAULT_GROUP_NAME: &str = "gateway.networking.k8s.io";
pub const CORE_GROUP_NAME: &str = "";
pub const DEFAULT_NAMESPACE_NAME: &str = "default";
pub const GATEWAY_KIND_NAME: &str = "Gateway";
pub const SERVICE_KIND_NAME: &str = "Service";
pub const SECRET_KIND_NAME: &str = "Secret";
