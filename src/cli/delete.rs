// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::GlobalOpts;
use crate::error::Result;
use crate::inflater::{DeleteFilters, Inflater};
use clap::Args;

/// Options to the delete command
#[derive(Args, Debug, Clone, Default)]
pub struct Opts {
    /// Only delete the workload with this name
    pub name: Option<String>,

    /// Delete every inflate workload in every managed namespace
    #[arg(short, long)]
    pub all: bool,
}

pub async fn run(opts: &Opts, global: &GlobalOpts) -> Result<String> {
    let filters = DeleteFilters {
        namespace: global.namespace.clone(),
        name: opts.name.clone(),
        all: opts.all,
    };
    // Fail before touching the kubeconfig
    filters.validate()?;

    let inflater = Inflater::new(global.client().await?);
    inflater.delete(&filters).await?;

    Ok("Successfully deleted inflates".to_string())
}
