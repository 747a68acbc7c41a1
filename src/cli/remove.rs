// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `osm namespace remove` - withdraw a namespace from a mesh

use crate::constants::DEFAULT_MESH_NAME;
use crate::error::{api_error_message, OsmError, Result};
use crate::kubernetes::namespaces::{get_namespace, leave_mesh, mesh_membership, update_namespace};
use clap::Args;
use kube::Client;
use std::io::Write;
use tracing::debug;

/// Options for the namespace remove command
#[derive(Args, Debug)]
pub struct Opts {
    /// Namespace to remove from the mesh
    pub namespace: String,

    /// Name of the mesh to remove the namespace from
    #[arg(long, default_value = DEFAULT_MESH_NAME)]
    pub mesh_name: String,
}

pub struct NamespaceRemoveCmd<W> {
    pub client: Client,
    pub out: W,
    pub mesh_name: String,
    pub namespace: String,
}

impl<W: Write> NamespaceRemoveCmd<W> {
    /// Remove the namespace from the mesh. Removing an unlabeled namespace
    /// is a no-op; a namespace labeled for a different mesh is refused
    /// without modification.
    pub async fn run(&mut self) -> Result<()> {
        let mut namespace = get_namespace(&self.client, &self.namespace)
            .await
            .map_err(|e| OsmError::GetNamespace {
                namespace: self.namespace.clone(),
                reason: api_error_message(&e),
            })?;

        let Some(membership) = mesh_membership(&namespace).map(str::to_string) else {
            writeln!(
                self.out,
                "Namespace [{}] already does not belong to any mesh",
                self.namespace
            )?;
            return Ok(());
        };

        if membership != self.mesh_name {
            return Err(OsmError::MeshMismatch {
                actual: membership,
                requested: self.mesh_name.clone(),
            });
        }

        debug!(
            "Removing namespace {} from mesh {}",
            self.namespace, self.mesh_name
        );
        leave_mesh(&mut namespace);
        update_namespace(&self.client, &namespace).await?;

        writeln!(
            self.out,
            "Namespace [{}] successfully removed from mesh [{}]",
            self.namespace, self.mesh_name
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{annotations, labels};
    use crate::test_utils::{make_namespace, FakeCluster};

    const TEST_NAMESPACE: &str = "namespace";
    const TEST_MESH_NAME: &str = "mesh";

    fn make_cmd(cluster: &FakeCluster, mesh_name: &str) -> NamespaceRemoveCmd<Vec<u8>> {
        NamespaceRemoveCmd {
            client: cluster.client(),
            out: Vec::new(),
            mesh_name: mesh_name.to_string(),
            namespace: TEST_NAMESPACE.to_string(),
        }
    }

    fn output(cmd: &NamespaceRemoveCmd<Vec<u8>>) -> String {
        String::from_utf8(cmd.out.clone()).unwrap()
    }

    #[tokio::test]
    async fn test_remove_strips_label() {
        let cluster = FakeCluster::new();
        cluster.add_namespace(make_namespace(TEST_NAMESPACE, Some(TEST_MESH_NAME), false));
        let mut cmd = make_cmd(&cluster, TEST_MESH_NAME);

        cmd.run().await.unwrap();

        assert_eq!(
            output(&cmd),
            "Namespace [namespace] successfully removed from mesh [mesh]\n"
        );

        let ns = cluster.namespace(TEST_NAMESPACE).unwrap();
        assert!(!ns
            .metadata
            .labels
            .unwrap_or_default()
            .contains_key(labels::MONITORED_BY));
    }

    #[tokio::test]
    async fn test_remove_strips_label_and_annotation() {
        let cluster = FakeCluster::new();
        cluster.add_namespace(make_namespace(TEST_NAMESPACE, Some(TEST_MESH_NAME), true));
        let mut cmd = make_cmd(&cluster, TEST_MESH_NAME);

        cmd.run().await.unwrap();

        assert_eq!(
            output(&cmd),
            "Namespace [namespace] successfully removed from mesh [mesh]\n"
        );

        let ns = cluster.namespace(TEST_NAMESPACE).unwrap();
        assert!(!ns
            .metadata
            .labels
            .unwrap_or_default()
            .contains_key(labels::MONITORED_BY));
        assert!(!ns
            .metadata
            .annotations
            .unwrap_or_default()
            .contains_key(annotations::SIDECAR_INJECTION));
    }

    #[tokio::test]
    async fn test_remove_wrong_mesh_fails() {
        let cluster = FakeCluster::new();
        cluster.add_namespace(make_namespace(TEST_NAMESPACE, Some(TEST_MESH_NAME), false));
        let mut cmd = make_cmd(&cluster, "incorrectMesh");

        let err = cmd.run().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Namespace belongs to mesh [mesh], not mesh [incorrectMesh]. Please specify the correct mesh"
        );

        let ns = cluster.namespace(TEST_NAMESPACE).unwrap();
        assert_eq!(
            ns.metadata.labels.unwrap().get(labels::MONITORED_BY),
            Some(&TEST_MESH_NAME.to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_unlabeled_namespace_is_noop() {
        let cluster = FakeCluster::new();
        cluster.add_namespace(make_namespace(TEST_NAMESPACE, None, false));
        let mut cmd = make_cmd(&cluster, TEST_MESH_NAME);

        cmd.run().await.unwrap();

        assert_eq!(
            output(&cmd),
            "Namespace [namespace] already does not belong to any mesh\n"
        );
    }

    #[tokio::test]
    async fn test_remove_missing_namespace_fails() {
        let cluster = FakeCluster::new();
        let mut cmd = make_cmd(&cluster, TEST_MESH_NAME);

        let err = cmd.run().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Could not get namespace [namespace]: namespaces \"namespace\" not found"
        );
    }
}
