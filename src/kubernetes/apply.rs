// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Idempotent create-or-update of namespaced objects

use crate::error::{is_already_exists, Result};
use kube::{api::PostParams, Api, Resource, ResourceExt};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument};

/// Create `object`, or replace the live copy if it already exists.
///
/// Returns the object as stored by the API server.
#[instrument(skip(api, object), fields(kind = %K::kind(&()), name = %object.name_any()))]
pub async fn create_or_replace<K>(api: &Api<K>, object: &K) -> Result<K>
where
    K: Resource<DynamicType = ()> + Clone + Debug + Serialize + DeserializeOwned,
{
    let name = object.name_any();
    let pp = PostParams::default();

    match api.create(&pp, object).await {
        Ok(created) => {
            info!("Created {} {}", K::kind(&()), name);
            Ok(created)
        }
        Err(err) if is_already_exists(&err) => {
            debug!("{} {} already exists, replacing", K::kind(&()), name);
            let live = api.get(&name).await?;

            let mut desired = object.clone();
            desired.meta_mut().resource_version = live.resource_version();

            let replaced = api.replace(&name, &pp, &desired).await?;
            info!("Updated {} {}", K::kind(&()), name);
            Ok(replaced)
        }
        Err(err) => Err(err.into()),
    }
}
