// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::constants::labels;
use crate::error::{is_already_exists, is_not_found, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Ensure a namespace exists in the cluster, create it with the marker label if it doesn't
#[instrument(skip(client))]
pub async fn ensure_namespace_exists(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(namespace).await {
        Ok(_) => {
            debug!("Namespace {} already exists", namespace);
            Ok(())
        }
        Err(err) if is_not_found(&err) => {
            info!("Creating namespace {}", namespace);
            match namespaces
                .create(&PostParams::default(), &managed_namespace(namespace))
                .await
            {
                Ok(_) => {
                    info!("Namespace {} created successfully", namespace);
                    Ok(())
                }
                Err(err) if is_already_exists(&err) => {
                    debug!("Namespace {} was created concurrently", namespace);
                    Ok(())
                }
                Err(err) => Err(err.into()),
            }
        }
        Err(err) => Err(err.into()),
    }
}

/// Names of every namespace carrying the inflate marker label
#[instrument(skip(client))]
pub async fn managed_namespaces(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces
        .list(&ListParams::default().labels(labels::MANAGED_BY_SELECTOR))
        .await?;

    let names: Vec<String> = list.items.iter().map(|ns| ns.name_any()).collect();
    debug!("Found {} managed namespaces", names.len());
    Ok(names)
}

fn managed_namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(BTreeMap::from([(
                labels::MANAGED_BY.to_string(),
                labels::MANAGED_BY_VALUE.to_string(),
            )])),
            ..Default::default()
        },
        ..Default::default()
    }
}
