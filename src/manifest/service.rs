// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::config::InflateConfig;
use crate::constants::service;
use crate::manifest::{object_meta, workload_labels};
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// Build a ClusterIP Service selecting the same pods as the Deployment
pub fn build_service(config: &InflateConfig, name: &str) -> Service {
    Service {
        metadata: object_meta(&config.namespace, name),
        spec: Some(ServiceSpec {
            selector: Some(workload_labels(name)),
            ports: Some(vec![ServicePort {
                port: service::PORT,
                target_port: Some(IntOrString::Int(service::PORT)),
                protocol: Some(service::PROTOCOL.to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
