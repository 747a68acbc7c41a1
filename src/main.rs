// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use osm_cli::cli::NamespaceCommand;
use osm_cli::config::Config;
use osm_cli::kubernetes::create_client;

#[derive(Parser, Debug)]
#[command(name = "osm", version, about = "Manage the mesh membership of Kubernetes namespaces")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the kubeconfig file to use
    #[arg(long, global = true, env = "KUBECONFIG")]
    kubeconfig: Option<PathBuf>,

    /// Name of the kubeconfig context to use
    #[arg(long, global = true)]
    context: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the mesh membership of namespaces
    #[command(subcommand)]
    Namespace(NamespaceCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config {
        kubeconfig: cli.kubeconfig,
        context: cli.context,
    };

    let client = create_client(&config).await?;
    debug!("Connected to Kubernetes cluster");

    match cli.command {
        Command::Namespace(command) => {
            osm_cli::cli::run_namespace(command, client, io::stdout()).await?
        }
    }

    Ok(())
}
