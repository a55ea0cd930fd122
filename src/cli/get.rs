// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::GlobalOpts;
use crate::error::Result;
use crate::inflater::{Inflater, ListFilters};
use crate::output::{deployment_table, to_yaml, OutputFormat};
use clap::Args;

/// Options to the get command
#[derive(Args, Debug, Clone, Default)]
pub struct Opts {
    /// Only show the workload with this name
    pub name: Option<String>,
}

pub async fn run(opts: &Opts, global: &GlobalOpts) -> Result<String> {
    let filters = ListFilters {
        namespace: global.namespace.clone(),
        name: opts.name.clone(),
    };

    let inflater = Inflater::new(global.client().await?);
    let deployments = inflater.list(&filters).await?;

    match global.output {
        OutputFormat::Yaml => to_yaml(&deployments),
        OutputFormat::Short => Ok(deployment_table(&deployments, false)),
        OutputFormat::Wide => Ok(deployment_table(&deployments, true)),
    }
}
