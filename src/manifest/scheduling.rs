// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Node selection and topology spread rules for the pod template

use crate::config::InflateConfig;
use crate::constants::topology;
use k8s_openapi::api::core::v1::TopologySpreadConstraint;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use std::collections::BTreeMap;

/// Node selector built from the non-empty architecture and OS options.
/// Returns `None` rather than an empty map when neither is set.
pub fn node_selector(config: &InflateConfig) -> Option<BTreeMap<String, String>> {
    let selector: BTreeMap<String, String> = [
        (topology::ARCH, config.cpu_arch.as_deref()),
        (topology::OS, config.os.as_deref()),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value
            .filter(|v| !v.is_empty())
            .map(|v| (key.to_string(), v.to_string()))
    })
    .collect();

    (!selector.is_empty()).then_some(selector)
}

/// One constraint per enabled spread dimension, ordered zone, hostname, capacity type
pub fn topology_spread(
    config: &InflateConfig,
    match_labels: &BTreeMap<String, String>,
) -> Option<Vec<TopologySpreadConstraint>> {
    let constraints: Vec<_> = [
        (config.zonal_spread, topology::ZONE),
        (config.hostname_spread, topology::HOSTNAME),
        (config.capacity_type_spread, topology::CAPACITY_TYPE),
    ]
    .into_iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, key)| spread_constraint(key, match_labels))
    .collect();

    (!constraints.is_empty()).then_some(constraints)
}

fn spread_constraint(
    topology_key: &str,
    match_labels: &BTreeMap<String, String>,
) -> TopologySpreadConstraint {
    TopologySpreadConstraint {
        max_skew: 1,
        topology_key: topology_key.to_string(),
        when_unsatisfiable: topology::DO_NOT_SCHEDULE.to_string(),
        label_selector: Some(LabelSelector {
            match_labels: Some(match_labels.clone()),
            ..Default::default()
        }),
        ..Default::default()
    }
}
