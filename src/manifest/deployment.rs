// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::config::InflateConfig;
use crate::constants::resources;
use crate::manifest::scheduling::{node_selector, topology_spread};
use crate::manifest::{object_meta, workload_labels};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use std::collections::BTreeMap;

/// Build the workload Deployment. Replicas start at zero; something else scales it.
pub fn build_deployment(config: &InflateConfig, name: &str) -> Deployment {
    let labels = workload_labels(name);

    Deployment {
        metadata: object_meta(&config.namespace, name),
        spec: Some(DeploymentSpec {
            replicas: Some(0),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels.clone()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    host_network: config.host_network.then_some(true),
                    termination_grace_period_seconds: Some(0),
                    containers: vec![Container {
                        name: name.to_string(),
                        image: Some(config.image.clone()),
                        resources: Some(resource_requests()),
                        ..Default::default()
                    }],
                    topology_spread_constraints: topology_spread(config, &labels),
                    node_selector: node_selector(config),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn resource_requests() -> ResourceRequirements {
    ResourceRequirements {
        requests: Some(BTreeMap::from([
            ("cpu".to_string(), Quantity(resources::CPU_REQUEST.to_string())),
            (
                "memory".to_string(),
                Quantity(resources::MEMORY_REQUEST.to_string()),
            ),
        ])),
        ..Default::default()
    }
}
