// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Could not add namespace [{namespace}] to mesh [{mesh_name}]: {reason}")]
    AddNamespace {
        namespace: String,
        mesh_name: String,
        reason: String,
    },

    #[error("Could not get namespace [{namespace}]: {reason}")]
    GetNamespace { namespace: String, reason: String },

    #[error("Namespace belongs to mesh [{actual}], not mesh [{requested}]. Please specify the correct mesh")]
    MeshMismatch { actual: String, requested: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OsmError>;

/// Extract the API server's own message from a kube error. Error strings
/// shown to the user carry the bare apiserver message (e.g. `namespaces
/// "foo" not found`) rather than kube's wrapped display form.
pub fn api_error_message(err: &kube::Error) -> String {
    match err {
        kube::Error::Api(resp) => resp.message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    #[test]
    fn test_api_error_message_unwraps_api_errors() {
        let err = kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "namespaces \"foo\" not found".to_string(),
            reason: "NotFound".to_string(),
            code: 404,
        });

        assert_eq!(api_error_message(&err), "namespaces \"foo\" not found");
    }

    #[test]
    fn test_mesh_mismatch_display() {
        let err = OsmError::MeshMismatch {
            actual: "mesh1".to_string(),
            requested: "mesh2".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Namespace belongs to mesh [mesh1], not mesh [mesh2]. Please specify the correct mesh"
        );
    }
}
