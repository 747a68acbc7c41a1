// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The `namespace` command group: add, remove, and list mesh membership.

use crate::error::Result;
use clap::Subcommand;
use kube::Client;
use std::io::Write;

pub mod add;
pub mod list;
pub mod remove;

pub use add::NamespaceAddCmd;
pub use list::NamespaceListCmd;
pub use remove::NamespaceRemoveCmd;

#[derive(Subcommand, Debug)]
pub enum NamespaceCommand {
    /// Add namespaces to a mesh
    Add(add::Opts),
    /// Remove a namespace from its mesh
    Remove(remove::Opts),
    /// List namespaces belonging to a mesh
    List(list::Opts),
}

/// Run a namespace subcommand against the cluster, writing to `out`
pub async fn run_namespace<W: Write>(
    command: NamespaceCommand,
    client: Client,
    out: W,
) -> Result<()> {
    match command {
        NamespaceCommand::Add(opts) => {
            NamespaceAddCmd {
                client,
                out,
                mesh_name: opts.mesh_name,
                namespaces: opts.namespaces,
                enable_sidecar_injection: opts.enable_sidecar_injection,
            }
            .run()
            .await
        }
        NamespaceCommand::Remove(opts) => {
            NamespaceRemoveCmd {
                client,
                out,
                mesh_name: opts.mesh_name,
                namespace: opts.namespace,
            }
            .run()
            .await
        }
        NamespaceCommand::List(opts) => {
            NamespaceListCmd {
                client,
                out,
                mesh_name: opts.mesh_name,
            }
            .run()
            .await
        }
    }
}
