// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `osm namespace add` - enroll namespaces in a mesh

use crate::constants::{DEFAULT_MESH_NAME, OSM_CONTROLLER_NAME};
use crate::error::{api_error_message, OsmError, Result};
use crate::kubernetes::namespaces::{get_namespace, join_mesh, update_namespace};
use crate::kubernetes::workloads::controller_installed;
use clap::Args;
use kube::Client;
use std::io::Write;
use tracing::debug;

/// Options for the namespace add command
#[derive(Args, Debug)]
pub struct Opts {
    /// Namespaces to add to the mesh
    #[arg(required = true)]
    pub namespaces: Vec<String>,

    /// Name of the mesh to add the namespaces to
    #[arg(long, default_value = DEFAULT_MESH_NAME)]
    pub mesh_name: String,

    /// Enable automatic sidecar injection for the namespaces
    #[arg(long)]
    pub enable_sidecar_injection: bool,
}

pub struct NamespaceAddCmd<W> {
    pub client: Client,
    pub out: W,
    pub mesh_name: String,
    pub namespaces: Vec<String>,
    pub enable_sidecar_injection: bool,
}

impl<W: Write> NamespaceAddCmd<W> {
    /// Add each namespace to the mesh in input order. A namespace already
    /// hosting a mesh controller is skipped with a warning; a fetch or
    /// update failure aborts the remaining namespaces.
    pub async fn run(&mut self) -> Result<()> {
        for ns_name in &self.namespaces {
            let mut namespace = get_namespace(&self.client, ns_name).await.map_err(|e| {
                OsmError::AddNamespace {
                    namespace: ns_name.clone(),
                    mesh_name: self.mesh_name.clone(),
                    reason: api_error_message(&e),
                }
            })?;

            if controller_installed(&self.client, ns_name).await? {
                writeln!(
                    self.out,
                    "Namespace [{}] already has [{}] installed and cannot be added to mesh [{}]",
                    ns_name, OSM_CONTROLLER_NAME, self.mesh_name
                )?;
                continue;
            }

            debug!("Adding namespace {} to mesh {}", ns_name, self.mesh_name);
            join_mesh(&mut namespace, &self.mesh_name, self.enable_sidecar_injection);

            update_namespace(&self.client, &namespace)
                .await
                .map_err(|e| OsmError::AddNamespace {
                    namespace: ns_name.clone(),
                    mesh_name: self.mesh_name.clone(),
                    reason: api_error_message(&e),
                })?;

            writeln!(
                self.out,
                "Namespace [{}] successfully added to mesh [{}]",
                ns_name, self.mesh_name
            )?;
        }

        Ok(())
    }
}
