// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Detection of an already-installed mesh control plane

use crate::constants::{labels, OSM_CONTROLLER_NAME};
use crate::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Check whether a mesh controller deployment is running in the namespace.
/// A namespace hosting a controller cannot be added to another mesh.
#[instrument(skip(client))]
pub async fn controller_installed(client: &Client, namespace: &str) -> Result<bool> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let selector = format!("{}={}", labels::APP, OSM_CONTROLLER_NAME);
    let list = deployments
        .list(&ListParams::default().labels(&selector))
        .await?;

    debug!(
        "Found {} controller deployment(s) in namespace {}",
        list.items.len(),
        namespace
    );

    Ok(!list.items.is_empty())
}
