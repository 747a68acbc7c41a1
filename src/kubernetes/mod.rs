// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace metadata, and
//! controller detection.

pub mod client;
pub mod namespaces;
pub mod workloads;

pub use client::create_client;
pub use namespaces::{join_mesh, leave_mesh, mesh_membership};
pub use workloads::controller_installed;
