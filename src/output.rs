// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of manifests and workload listings for the terminal

use crate::error::Result;
use crate::manifest::Manifests;
use clap::ValueEnum;
use k8s_openapi::api::apps::v1::Deployment;
use kube::ResourceExt;
use prettytable::{format, row, Table};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Full objects as YAML
    Yaml,
    /// Namespace and name
    #[default]
    Short,
    /// Short columns plus image and readiness
    Wide,
}

pub fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Every manifest as one multi-document YAML stream
pub fn manifests_yaml(manifests: &Manifests) -> Result<String> {
    let mut docs = vec![to_yaml(&manifests.deployment)?];
    if let Some(svc) = &manifests.service {
        docs.push(to_yaml(svc)?);
    }
    Ok(docs.join("---\n"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DeploymentRow {
    namespace: String,
    name: String,
    image: String,
    ready: String,
}

impl From<&Deployment> for DeploymentRow {
    fn from(deployment: &Deployment) -> Self {
        let spec = deployment.spec.as_ref();
        let image = spec
            .and_then(|s| s.template.spec.as_ref())
            .and_then(|p| p.containers.first())
            .and_then(|c| c.image.clone())
            .unwrap_or_default();
        let desired = spec.and_then(|s| s.replicas).unwrap_or(0);
        let ready = deployment
            .status
            .as_ref()
            .and_then(|s| s.ready_replicas)
            .unwrap_or(0);

        DeploymentRow {
            namespace: deployment.namespace().unwrap_or_default(),
            name: deployment.name_any(),
            image,
            ready: format!("{}/{}", ready, desired),
        }
    }
}

/// Table of Deployments sorted case-insensitively by namespace, then name
pub fn deployment_table(deployments: &[Deployment], wide: bool) -> String {
    let mut rows: Vec<DeploymentRow> = deployments.iter().map(DeploymentRow::from).collect();
    rows.sort_by_cached_key(|r| (r.namespace.to_lowercase(), r.name.to_lowercase()));

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    if wide {
        table.set_titles(row!["NAMESPACE", "NAME", "IMAGE", "READY"]);
        for r in &rows {
            table.add_row(row![r.namespace, r.name, r.image, r.ready]);
        }
    } else {
        table.set_titles(row!["NAMESPACE", "NAME"]);
        for r in &rows {
            table.add_row(row![r.namespace, r.name]);
        }
    }
    table.to_string().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InflateConfig;
    use crate::manifest::build_deployment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn deployment(namespace: &str, name: &str) -> Deployment {
        let config = InflateConfig {
            namespace: namespace.to_string(),
            ..Default::default()
        };
        build_deployment(&config, name)
    }

    fn cells(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn test_table_sorts_case_insensitively() {
        let deployments = vec![
            deployment("beta", "inflate-2"),
            deployment("Alpha", "inflate-b"),
            deployment("alpha", "Inflate-a"),
        ];

        let table = deployment_table(&deployments, false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(cells(lines[0]), vec!["NAMESPACE", "NAME"]);
        assert_eq!(cells(lines[1]), vec!["alpha", "Inflate-a"]);
        assert_eq!(cells(lines[2]), vec!["Alpha", "inflate-b"]);
        assert_eq!(cells(lines[3]), vec!["beta", "inflate-2"]);
    }

    #[test]
    fn test_wide_table_adds_image_and_ready() {
        let table = deployment_table(&[deployment("inflate", "inflate")], true);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(cells(lines[0]), vec!["NAMESPACE", "NAME", "IMAGE", "READY"]);
        assert_eq!(
            cells(lines[1]),
            vec![
                "inflate",
                "inflate",
                "public.ecr.aws/eks-distro/kubernetes/pause:3.7",
                "0/0"
            ]
        );
    }

    #[test]
    fn test_table_columns_line_up() {
        let deployments = vec![
            deployment("inflate", "inflate-1234567890"),
            deployment("load-test-namespace", "x"),
        ];

        let table = deployment_table(&deployments, false);
        let lines: Vec<&str> = table.lines().collect();
        let name_column = lines[0].find("NAME ").unwrap();

        assert_eq!(lines[1].find("inflate-1234567890"), Some(name_column));
        assert_eq!(lines[2].rfind('x'), Some(name_column));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = deployment_table(&[], false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 1);
        assert_eq!(cells(lines[0]), vec!["NAMESPACE", "NAME"]);
    }

    #[test]
    fn test_manifests_yaml_separates_documents() {
        let config = InflateConfig {
            service: true,
            ..Default::default()
        };
        let manifests = Manifests::render(&config, &mut StdRng::seed_from_u64(0));

        let yaml = manifests_yaml(&manifests).unwrap();

        assert_eq!(yaml.matches("---\n").count(), 1);
        assert!(yaml.contains("kind: Deployment"));
        assert!(yaml.contains("kind: Service"));
        assert!(yaml.contains("managed-by: inflate"));
    }

    #[test]
    fn test_manifests_yaml_omits_absent_node_selector() {
        let manifests = Manifests::render(&InflateConfig::default(), &mut StdRng::seed_from_u64(0));
        let yaml = manifests_yaml(&manifests).unwrap();

        assert!(!yaml.contains("nodeSelector"));
        assert!(!yaml.contains("topologySpreadConstraints"));
        assert!(yaml.contains("replicas: 0"));
    }
}
