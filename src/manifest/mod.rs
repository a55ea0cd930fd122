// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pure rendering of the inflate workload manifests.

pub mod deployment;
pub mod scheduling;
pub mod service;

pub use deployment::build_deployment;
pub use service::build_service;

use crate::config::InflateConfig;
use crate::constants::{defaults, labels};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use rand::Rng;
use std::collections::BTreeMap;

/// The objects making up one inflate workload
#[derive(Debug, Clone)]
pub struct Manifests {
    pub deployment: Deployment,
    pub service: Option<Service>,
}

impl Manifests {
    /// Render every manifest for `config`, drawing the name suffix from `rng`
    pub fn render<R: Rng>(config: &InflateConfig, rng: &mut R) -> Self {
        let name = workload_name(config.random_suffix, rng);
        Manifests {
            deployment: build_deployment(config, &name),
            service: config.service.then(|| build_service(config, &name)),
        }
    }
}

/// Base name, optionally followed by `-<n>` for a random non-negative `n`
pub fn workload_name<R: Rng>(random_suffix: bool, rng: &mut R) -> String {
    if random_suffix {
        format!("{}-{}", defaults::NAME, rng.gen_range(0..defaults::SUFFIX_BOUND))
    } else {
        defaults::NAME.to_string()
    }
}

pub fn workload_labels(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (labels::APP.to_string(), name.to_string()),
        (
            labels::MANAGED_BY.to_string(),
            labels::MANAGED_BY_VALUE.to_string(),
        ),
    ])
}

pub(crate) fn object_meta(namespace: &str, name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(namespace.to_string()),
        labels: Some(workload_labels(name)),
        ..Default::default()
    }
}
