// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: an in-memory fake API server backing a kube `Client`.
//!
//! The fake holds namespaces and deployments in a shared map and serves
//! the handful of routes the commands use, so tests can run a command and
//! then inspect both its output and the resulting cluster state.

use crate::constants::{annotations, labels, OSM_CONTROLLER_NAME, SIDECAR_INJECTION_ENABLED};
use http::{Request, Response};
use http_body_util::BodyExt;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Namespace;
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::{Client, ResourceExt};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

#[derive(Default)]
struct ClusterState {
    namespaces: BTreeMap<String, Namespace>,
    deployments: Vec<Deployment>,
}

/// An in-memory cluster served over a mock HTTP service.
#[derive(Clone, Default)]
pub struct FakeCluster {
    state: Arc<Mutex<ClusterState>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a kube Client backed by this fake
    pub fn client(&self) -> Client {
        Client::new(self.clone(), "default")
    }

    pub fn add_namespace(&self, namespace: Namespace) {
        let name = namespace.name_any();
        self.state.lock().unwrap().namespaces.insert(name, namespace);
    }

    pub fn add_deployment(&self, deployment: Deployment) {
        self.state.lock().unwrap().deployments.push(deployment);
    }

    /// Current stored state of a namespace, if it exists
    pub fn namespace(&self, name: &str) -> Option<Namespace> {
        self.state.lock().unwrap().namespaces.get(name).cloned()
    }

    fn handle(&self, method: &str, path: &str, selector: Option<&str>, body: &[u8]) -> Response<Body> {
        let mut state = self.state.lock().unwrap();

        if let Some(rest) = path.strip_prefix("/api/v1/namespaces") {
            match (method, rest) {
                ("GET", "") => {
                    let items: Vec<&Namespace> = state
                        .namespaces
                        .values()
                        .filter(|ns| matches_selector(ns.metadata.labels.as_ref(), selector))
                        .collect();
                    return json_response(200, list_json("v1", "NamespaceList", &items));
                }
                ("GET", _) => {
                    let name = rest.trim_start_matches('/');
                    return match state.namespaces.get(name) {
                        Some(ns) => json_response(200, serde_json::to_string(ns).unwrap()),
                        None => json_response(404, not_found_json("namespaces", name)),
                    };
                }
                ("PUT", _) => {
                    let name = rest.trim_start_matches('/');
                    if !state.namespaces.contains_key(name) {
                        return json_response(404, not_found_json("namespaces", name));
                    }
                    let namespace: Namespace =
                        serde_json::from_slice(body).expect("request body should be a Namespace");
                    state.namespaces.insert(name.to_string(), namespace.clone());
                    return json_response(200, serde_json::to_string(&namespace).unwrap());
                }
                _ => {}
            }
        }

        if method == "GET" {
            if let Some(rest) = path.strip_prefix("/apis/apps/v1/namespaces/") {
                if let Some(ns) = rest.strip_suffix("/deployments") {
                    let items: Vec<&Deployment> = state
                        .deployments
                        .iter()
                        .filter(|d| d.metadata.namespace.as_deref() == Some(ns))
                        .filter(|d| matches_selector(d.metadata.labels.as_ref(), selector))
                        .collect();
                    return json_response(200, list_json("apps/v1", "DeploymentList", &items));
                }
            }
        }

        json_response(404, not_found_json("path", path))
    }
}

impl Service<Request<Body>> for FakeCluster {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let cluster = self.clone();

        Box::pin(async move {
            let method = req.method().to_string();
            let path = req.uri().path().to_string();
            let selector = label_selector(req.uri().query());
            let body = req.into_body().collect().await?.to_bytes();

            Ok(cluster.handle(&method, &path, selector.as_deref(), &body))
        })
    }
}

/// Decode the labelSelector query parameter, if any
fn label_selector(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "labelSelector")
        .map(|(_, v)| v.into_owned())
}

/// Match labels against an equality-based selector (`key` and `key=value`
/// terms, comma-separated). No selector matches everything.
fn matches_selector(item_labels: Option<&BTreeMap<String, String>>, selector: Option<&str>) -> bool {
    let Some(selector) = selector else {
        return true;
    };

    selector
        .split(',')
        .filter(|term| !term.is_empty())
        .all(|term| match term.split_once('=') {
            Some((key, value)) => {
                item_labels.is_some_and(|l| l.get(key).is_some_and(|v| v == value))
            }
            None => item_labels.is_some_and(|l| l.contains_key(term)),
        })
}

fn json_response(status: u16, body: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.into_bytes()))
        .unwrap()
}

fn list_json<T: serde::Serialize>(api_version: &str, kind: &str, items: &[T]) -> String {
    serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {},
        "items": items,
    })
    .to_string()
}

/// An apiserver-shaped 404 Status response
fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Namespace fixture, optionally enrolled in a mesh
pub fn make_namespace(name: &str, mesh_name: Option<&str>, sidecar_injection: bool) -> Namespace {
    let ns_labels = mesh_name
        .map(|mesh| BTreeMap::from([(labels::MONITORED_BY.to_string(), mesh.to_string())]));
    let ns_annotations = sidecar_injection.then(|| {
        BTreeMap::from([(
            annotations::SIDECAR_INJECTION.to_string(),
            SIDECAR_INJECTION_ENABLED.to_string(),
        )])
    });

    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: ns_labels,
            annotations: ns_annotations,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Mesh controller deployment fixture
pub fn make_controller_deployment(namespace: &str, mesh_name: &str) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(OSM_CONTROLLER_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(BTreeMap::from([
                (labels::APP.to_string(), OSM_CONTROLLER_NAME.to_string()),
                ("meshName".to_string(), mesh_name.to_string()),
            ])),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_selector_key_presence() {
        let item_labels = BTreeMap::from([("a".to_string(), "1".to_string())]);

        assert!(matches_selector(Some(&item_labels), Some("a")));
        assert!(!matches_selector(Some(&item_labels), Some("b")));
        assert!(!matches_selector(None, Some("a")));
    }

    #[test]
    fn test_matches_selector_equality() {
        let item_labels = BTreeMap::from([("a".to_string(), "1".to_string())]);

        assert!(matches_selector(Some(&item_labels), Some("a=1")));
        assert!(!matches_selector(Some(&item_labels), Some("a=2")));
    }

    #[test]
    fn test_matches_selector_empty() {
        assert!(matches_selector(None, None));
    }

    #[test]
    fn test_label_selector_decoding() {
        assert_eq!(
            label_selector(Some("labelSelector=app%3Dosm-controller")),
            Some("app=osm-controller".to_string())
        );
        assert_eq!(label_selector(Some("limit=500")), None);
        assert_eq!(label_selector(None), None);
    }
}
