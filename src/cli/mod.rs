// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line interface: argument parsing and command dispatch.

pub mod create;
pub mod delete;
pub mod get;

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::error::{InflateError, Result};
use crate::kubernetes::create_client;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use kube::Client;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;

/// Generate synthetic Kubernetes workloads for capacity and autoscaler testing
#[derive(Parser, Debug)]
#[command(name = "inflate", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Namespace to operate in. Defaults to `inflate` for create and to every
    /// inflate-managed namespace for get and delete.
    #[arg(short, long, global = true, env = "INFLATE_NAMESPACE")]
    pub namespace: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Path to a kubeconfig file
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Deadline in seconds for the whole command
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl GlobalOpts {
    pub async fn client(&self) -> Result<Client> {
        create_client(self.kubeconfig.as_deref(), self.context.as_deref()).await
    }
}

/// Available Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an inflatable or maybe a few
    Create(create::Opts),
    /// Get an inflatable or maybe a few
    Get(get::Opts),
    /// Delete an inflatable or maybe a few
    Delete(delete::Opts),
}

/// Run the parsed command under the global deadline, returning what to print
pub async fn run(cli: Cli) -> Result<String> {
    let Cli { command, global } = cli;
    let deadline = Duration::from_secs(global.timeout);

    let command = async {
        match command {
            Command::Create(opts) => create::run(&opts, &global).await,
            Command::Get(opts) => get::run(&opts, &global).await,
            Command::Delete(opts) => delete::run(&opts, &global).await,
        }
    };

    with_deadline(deadline, command).await
}

/// Fail with `InflateError::Timeout` when `fut` does not finish within `deadline`
pub async fn with_deadline<T, F>(deadline: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    timeout(deadline, fut)
        .await
        .map_err(|_| InflateError::Timeout(deadline))?
}
