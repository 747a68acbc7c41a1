// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation from command-line connection settings

use crate::config::Config;
use crate::error::{OsmError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client,
};
use tracing::{debug, instrument};

/// Create a Kubernetes client for the given connection settings.
///
/// With no kubeconfig path and no context override the ambient
/// configuration is used (in-cluster service account or the default
/// kubeconfig). Otherwise the kubeconfig is loaded explicitly so the
/// requested context can be selected.
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    if config.kubeconfig.is_none() && config.context.is_none() {
        debug!("Using ambient Kubernetes configuration");
        return Client::try_default()
            .await
            .map_err(|e| OsmError::KubeconfigError(format!("Failed to create client: {}", e)));
    }

    let kubeconfig = match &config.kubeconfig {
        Some(path) => {
            debug!("Loading kubeconfig from {}", path.display());
            let contents = std::fs::read_to_string(path).map_err(|e| {
                OsmError::KubeconfigError(format!(
                    "Failed to read kubeconfig {}: {}",
                    path.display(),
                    e
                ))
            })?;
            parse_kubeconfig(&contents)?
        }
        None => Kubeconfig::read()
            .map_err(|e| OsmError::KubeconfigError(format!("Failed to read kubeconfig: {}", e)))?,
    };

    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };

    let client_config = kube::Config::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .map_err(|e| OsmError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| OsmError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Parse a kubeconfig document from its YAML text
fn parse_kubeconfig(contents: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(contents)
        .map_err(|e| OsmError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kubeconfig_valid() {
        let contents = r#"
apiVersion: v1
kind: Config
current-context: test
contexts:
  - name: test
    context:
      cluster: test
      user: test
clusters:
  - name: test
    cluster:
      server: https://localhost:6443
users:
  - name: test
    user: {}
"#;

        let kubeconfig = parse_kubeconfig(contents).unwrap();
        assert_eq!(kubeconfig.current_context.as_deref(), Some("test"));
    }

    #[test]
    fn test_parse_kubeconfig_invalid() {
        let err = parse_kubeconfig(": not yaml : [").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse kubeconfig:"));
    }
}
