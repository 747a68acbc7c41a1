// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `osm namespace list` - enumerate namespaces belonging to a mesh

use crate::constants::labels;
use crate::error::Result;
use crate::kubernetes::namespaces::mesh_membership;
use clap::Args;
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client, ResourceExt};
use std::io::Write;

/// Options for the namespace list command
#[derive(Args, Debug)]
pub struct Opts {
    /// Only list namespaces belonging to this mesh
    #[arg(long)]
    pub mesh_name: Option<String>,
}

pub struct NamespaceListCmd<W> {
    pub client: Client,
    pub out: W,
    pub mesh_name: Option<String>,
}

impl<W: Write> NamespaceListCmd<W> {
    pub async fn run(&mut self) -> Result<()> {
        let namespaces = self.select_namespaces().await?;

        if namespaces.is_empty() {
            match &self.mesh_name {
                Some(mesh) => writeln!(self.out, "No namespaces in mesh [{}]", mesh)?,
                None => writeln!(self.out, "No namespaces in any mesh")?,
            }
            return Ok(());
        }

        writeln!(self.out, "NAMESPACE\tMESH")?;
        for ns in &namespaces {
            writeln!(
                self.out,
                "{}\t{}",
                ns.name_any(),
                mesh_membership(ns).unwrap_or_default()
            )?;
        }

        Ok(())
    }

    /// Namespaces carrying the monitor label, restricted to the requested
    /// mesh when a filter is set
    pub async fn select_namespaces(&self) -> Result<Vec<Namespace>> {
        let api: Api<Namespace> = Api::all(self.client.clone());

        let selector = match &self.mesh_name {
            Some(mesh) => format!("{}={}", labels::MONITORED_BY, mesh),
            None => labels::MONITORED_BY.to_string(),
        };

        let list = api.list(&ListParams::default().labels(&selector)).await?;
        Ok(list.items)
    }
}
