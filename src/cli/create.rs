// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::GlobalOpts;
use crate::config::{InflateConfig, Options};
use crate::error::Result;
use crate::inflater::Inflater;
use crate::manifest::Manifests;
use crate::output::{manifests_yaml, OutputFormat};
use clap::Args;
use kube::ResourceExt;
use tracing::debug;

/// Options to the create command
#[derive(Args, Debug, Clone, Default)]
pub struct Opts {
    /// Container image to use
    #[arg(short, long, env = "INFLATE_IMAGE")]
    pub image: Option<String>,

    /// Add a zonal topology spread constraint
    #[arg(short, long)]
    pub zonal_spread: bool,

    /// Add a hostname topology spread constraint
    #[arg(long)]
    pub hostname_spread: bool,

    /// Add a capacity-type topology spread constraint
    #[arg(long)]
    pub capacity_type_spread: bool,

    /// Use host networking
    #[arg(long)]
    pub host_network: bool,

    /// Only schedule onto nodes of this CPU architecture (e.g. amd64, arm64)
    #[arg(long)]
    pub arch: Option<String>,

    /// Only schedule onto nodes running this OS (e.g. linux)
    #[arg(long)]
    pub os: Option<String>,

    /// Also create a Service selecting the workload
    #[arg(long)]
    pub service: bool,

    /// Add a random suffix to the deployment name
    #[arg(long)]
    pub random_suffix: bool,

    /// Print the manifests without applying them
    #[arg(long)]
    pub dry_run: bool,
}

impl Opts {
    /// Flags become options only when set, so unset flags keep their defaults
    pub fn to_options(&self, namespace: Option<String>) -> Options {
        Options {
            namespace,
            image: self.image.clone(),
            random_suffix: self.random_suffix.then_some(true),
            zonal_spread: self.zonal_spread.then_some(true),
            hostname_spread: self.hostname_spread.then_some(true),
            capacity_type_spread: self.capacity_type_spread.then_some(true),
            host_network: self.host_network.then_some(true),
            cpu_arch: self.arch.clone(),
            os: self.os.clone(),
            service: self.service.then_some(true),
            dry_run: self.dry_run.then_some(true),
        }
    }
}

pub async fn run(opts: &Opts, global: &GlobalOpts) -> Result<String> {
    let config = opts
        .to_options(global.namespace.clone())
        .merge(&InflateConfig::default());
    debug!(?config, "resolved configuration");

    let manifests = Manifests::render(&config, &mut rand::thread_rng());
    if config.dry_run {
        return manifests_yaml(&manifests);
    }

    let inflater = Inflater::new(global.client().await?);
    let applied = inflater.inflate(&manifests).await?;

    if global.output == OutputFormat::Yaml {
        return manifests_yaml(&applied);
    }
    Ok(summary(&applied))
}

fn summary(applied: &Manifests) -> String {
    let mut lines = vec![format!(
        "Created {}/{}",
        applied.deployment.namespace().unwrap_or_default(),
        applied.deployment.name_any()
    )];
    if let Some(svc) = &applied.service {
        lines.push(format!(
            "Created {}/{}",
            svc.namespace().unwrap_or_default(),
            svc.name_any()
        ));
    }
    lines.join("\n")
}
