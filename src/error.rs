// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InflateError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("must specify --namespace OR name OR --all")]
    MissingDeleteFilter,

    #[error("{}", join_messages(.0))]
    Aggregate(Vec<InflateError>),

    #[error("Failed to render manifest: {0}")]
    RenderError(#[from] serde_yaml::Error),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl InflateError {
    /// Collapse accumulated per-namespace failures into a single result
    pub fn from_accumulated(mut errors: Vec<InflateError>) -> Result<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(InflateError::Aggregate(errors)),
        }
    }
}

pub(crate) fn is_already_exists(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 409 && resp.reason == "AlreadyExists")
}

pub(crate) fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 404)
}

fn join_messages(errors: &[InflateError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, InflateError>;
