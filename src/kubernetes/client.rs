// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation from the ambient or an explicit kubeconfig

use crate::error::{InflateError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, instrument};

/// Create a client for the target cluster.
///
/// Without a kubeconfig path or context this defers to the usual inference
/// (in-cluster service account, `$KUBECONFIG`, or `~/.kube/config`).
#[instrument]
pub async fn create_client(kubeconfig: Option<&Path>, context: Option<&str>) -> Result<Client> {
    if kubeconfig.is_none() && context.is_none() {
        debug!("Inferring Kubernetes client configuration");
        let config = KConfig::infer()
            .await
            .map_err(|e| InflateError::KubeconfigError(format!("Failed to infer config: {}", e)))?;
        return client_from_config(config);
    }

    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let config = match kubeconfig {
        Some(path) => {
            debug!("Reading kubeconfig from {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                InflateError::KubeconfigError(format!(
                    "Failed to read kubeconfig {}: {}",
                    path.display(),
                    e
                ))
            })?;
            KConfig::from_custom_kubeconfig(kubeconfig, &options).await
        }
        None => KConfig::from_kubeconfig(&options).await,
    }
    .map_err(|e| InflateError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    client_from_config(config)
}

fn client_from_config(config: KConfig) -> Result<Client> {
    Client::try_from(config)
        .map_err(|e| InflateError::KubeconfigError(format!("Failed to create client: {}", e)))
}
