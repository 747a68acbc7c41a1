// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace access and mesh membership metadata

use crate::constants::{annotations, labels, SIDECAR_INJECTION_ENABLED};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::PostParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// Fetch a namespace by name
#[instrument(skip(client))]
pub async fn get_namespace(client: &Client, name: &str) -> kube::Result<Namespace> {
    let api: Api<Namespace> = Api::all(client.clone());
    api.get(name).await
}

/// Write a modified namespace back to the cluster
#[instrument(skip(client, namespace), fields(namespace = %namespace.name_any()))]
pub async fn update_namespace(client: &Client, namespace: &Namespace) -> kube::Result<Namespace> {
    let api: Api<Namespace> = Api::all(client.clone());
    debug!("Updating namespace {}", namespace.name_any());
    api.replace(&namespace.name_any(), &PostParams::default(), namespace)
        .await
}

/// The mesh a namespace belongs to, derived from its monitor label
pub fn mesh_membership(namespace: &Namespace) -> Option<&str> {
    namespace
        .metadata
        .labels
        .as_ref()
        .and_then(|l| l.get(labels::MONITORED_BY))
        .map(String::as_str)
}

/// Mark a namespace as belonging to a mesh. The sidecar injection
/// annotation is only written when requested; an existing annotation is
/// left untouched otherwise.
pub fn join_mesh(namespace: &mut Namespace, mesh_name: &str, enable_sidecar_injection: bool) {
    namespace
        .metadata
        .labels
        .get_or_insert_default()
        .insert(labels::MONITORED_BY.to_string(), mesh_name.to_string());

    if enable_sidecar_injection {
        namespace.metadata.annotations.get_or_insert_default().insert(
            annotations::SIDECAR_INJECTION.to_string(),
            SIDECAR_INJECTION_ENABLED.to_string(),
        );
    }
}

/// Strip the monitor label and the sidecar injection annotation, if present
pub fn leave_mesh(namespace: &mut Namespace) {
    if let Some(ns_labels) = namespace.metadata.labels.as_mut() {
        ns_labels.remove(labels::MONITORED_BY);
    }
    if let Some(ns_annotations) = namespace.metadata.annotations.as_mut() {
        ns_annotations.remove(annotations::SIDECAR_INJECTION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_namespace;

    #[test]
    fn test_mesh_membership_labeled() {
        let ns = make_namespace("bookstore", Some("osm"), false);
        assert_eq!(mesh_membership(&ns), Some("osm"));
    }

    #[test]
    fn test_mesh_membership_unlabeled() {
        let ns = make_namespace("bookstore", None, false);
        assert_eq!(mesh_membership(&ns), None);
    }

    #[test]
    fn test_join_mesh_sets_label_only() {
        let mut ns = make_namespace("bookstore", None, false);

        join_mesh(&mut ns, "osm", false);

        assert_eq!(mesh_membership(&ns), Some("osm"));
        assert!(ns.metadata.annotations.is_none());
    }

    #[test]
    fn test_join_mesh_with_sidecar_injection() {
        let mut ns = make_namespace("bookstore", None, false);

        join_mesh(&mut ns, "osm", true);

        let annotations = ns.metadata.annotations.unwrap();
        assert_eq!(
            annotations.get(annotations::SIDECAR_INJECTION).unwrap(),
            SIDECAR_INJECTION_ENABLED
        );
    }

    #[test]
    fn test_join_mesh_replaces_previous_membership() {
        let mut ns = make_namespace("bookstore", Some("mesh1"), false);

        join_mesh(&mut ns, "mesh2", false);

        assert_eq!(mesh_membership(&ns), Some("mesh2"));
    }

    #[test]
    fn test_leave_mesh_removes_label_and_annotation() {
        let mut ns = make_namespace("bookstore", Some("osm"), true);

        leave_mesh(&mut ns);

        assert_eq!(mesh_membership(&ns), None);
        assert!(!ns
            .metadata
            .annotations
            .unwrap()
            .contains_key(annotations::SIDECAR_INJECTION));
    }

    #[test]
    fn test_leave_mesh_on_unlabeled_namespace() {
        let mut ns = make_namespace("bookstore", None, false);

        leave_mesh(&mut ns);

        assert_eq!(mesh_membership(&ns), None);
    }
}
