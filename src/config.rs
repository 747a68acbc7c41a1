// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

/// Client connection settings shared by all subcommands
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a kubeconfig file; ambient configuration is used when unset
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use; the current context is used when unset
    pub context: Option<String>,
}
