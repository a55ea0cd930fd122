// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;

/// Resolved workload configuration, every field populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflateConfig {
    /// Namespace the workload is created in
    pub namespace: String,
    /// Container image run by the workload
    pub image: String,
    /// Append a random integer to the workload name
    pub random_suffix: bool,
    pub zonal_spread: bool,
    pub hostname_spread: bool,
    pub capacity_type_spread: bool,
    pub host_network: bool,
    /// Value for the `kubernetes.io/arch` node selector
    pub cpu_arch: Option<String>,
    /// Value for the `kubernetes.io/os` node selector
    pub os: Option<String>,
    /// Also create a Service selecting the workload
    pub service: bool,
    /// Render only, never contact the cluster
    pub dry_run: bool,
}

impl Default for InflateConfig {
    fn default() -> Self {
        InflateConfig {
            namespace: defaults::NAMESPACE.to_string(),
            image: defaults::IMAGE.to_string(),
            random_suffix: false,
            zonal_spread: false,
            hostname_spread: false,
            capacity_type_spread: false,
            host_network: false,
            cpu_arch: None,
            os: None,
            service: false,
            dry_run: false,
        }
    }
}

/// User supplied options. `None` and empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub namespace: Option<String>,
    pub image: Option<String>,
    pub random_suffix: Option<bool>,
    pub zonal_spread: Option<bool>,
    pub hostname_spread: Option<bool>,
    pub capacity_type_spread: Option<bool>,
    pub host_network: Option<bool>,
    pub cpu_arch: Option<String>,
    pub os: Option<String>,
    pub service: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Options {
    /// Overlay these options onto `defaults`, field by field
    pub fn merge(self, defaults: &InflateConfig) -> InflateConfig {
        InflateConfig {
            namespace: present(self.namespace).unwrap_or_else(|| defaults.namespace.clone()),
            image: present(self.image).unwrap_or_else(|| defaults.image.clone()),
            random_suffix: self.random_suffix.unwrap_or(defaults.random_suffix),
            zonal_spread: self.zonal_spread.unwrap_or(defaults.zonal_spread),
            hostname_spread: self.hostname_spread.unwrap_or(defaults.hostname_spread),
            capacity_type_spread: self
                .capacity_type_spread
                .unwrap_or(defaults.capacity_type_spread),
            host_network: self.host_network.unwrap_or(defaults.host_network),
            cpu_arch: present(self.cpu_arch).or_else(|| defaults.cpu_arch.clone()),
            os: present(self.os).or_else(|| defaults.os.clone()),
            service: self.service.unwrap_or(defaults.service),
            dry_run: self.dry_run.unwrap_or(defaults.dry_run),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
