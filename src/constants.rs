// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes label keys used by the mesh
pub mod labels {
    /// Records which mesh a namespace belongs to; the value is the mesh name
    pub const MONITORED_BY: &str = "openservicemesh.io/monitored-by";
    /// Standard workload label used to identify the controller deployment
    pub const APP: &str = "app";
}

/// Kubernetes annotation keys used by the mesh
pub mod annotations {
    /// When set to "enabled", the mesh injects sidecars into the namespace's pods
    pub const SIDECAR_INJECTION: &str = "openservicemesh.io/sidecar-injection";
}

/// Annotation value marking a namespace for automatic sidecar injection
pub const SIDECAR_INJECTION_ENABLED: &str = "enabled";

/// Name of the mesh controller deployment
pub const OSM_CONTROLLER_NAME: &str = "osm-controller";

/// Mesh name used when none is given on the command line
pub const DEFAULT_MESH_NAME: &str = "osm";
