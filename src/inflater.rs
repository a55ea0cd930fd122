// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster gateway: applies, lists, and deletes inflate workloads.

use crate::constants::labels;
use crate::error::{is_not_found, InflateError, Result};
use crate::kubernetes::{create_or_replace, ensure_namespace_exists, managed_namespaces};
use crate::manifest::Manifests;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{DeleteParams, ListParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument, warn};

/// Narrows `list` to a namespace and/or a workload name
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub namespace: Option<String>,
    pub name: Option<String>,
}

/// Narrows `delete`. At least one field must be set.
#[derive(Debug, Clone, Default)]
pub struct DeleteFilters {
    pub namespace: Option<String>,
    pub name: Option<String>,
    /// Explicitly delete every inflate workload in every managed namespace
    pub all: bool,
}

impl DeleteFilters {
    /// Reject a delete that names no namespace, no workload, and not `all`
    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_none() && self.name.is_none() && !self.all {
            return Err(InflateError::MissingDeleteFilter);
        }
        Ok(())
    }
}

pub struct Inflater {
    client: Client,
}

impl Inflater {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn ensure_namespace(&self, namespace: &str) -> Result<()> {
        ensure_namespace_exists(&self.client, namespace).await
    }

    /// Create or update a namespaced object in its own namespace
    pub async fn apply<K>(&self, object: &K) -> Result<K>
    where
        K: Resource<DynamicType = (), Scope = NamespaceResourceScope>
            + Clone
            + Debug
            + Serialize
            + DeserializeOwned,
    {
        let api: Api<K> = match object.namespace() {
            Some(ns) => Api::namespaced(self.client.clone(), &ns),
            None => Api::default_namespaced(self.client.clone()),
        };
        create_or_replace(&api, object).await
    }

    /// Ensure the target namespace and apply every manifest, returning what the server stored
    #[instrument(skip(self, manifests), fields(name = %manifests.deployment.name_any()))]
    pub async fn inflate(&self, manifests: &Manifests) -> Result<Manifests> {
        let namespace = manifests
            .deployment
            .namespace()
            .unwrap_or_else(|| self.client.default_namespace().to_string());

        self.ensure_namespace(&namespace).await?;

        let deployment = self.apply(&manifests.deployment).await?;
        let service = match &manifests.service {
            Some(svc) => Some(self.apply(svc).await?),
            None => None,
        };

        info!("Inflated {}/{}", namespace, deployment.name_any());
        Ok(Manifests { deployment, service })
    }

    /// List inflate Deployments.
    ///
    /// With a name, each namespace is queried for that Deployment and the first
    /// failure is returned. Without one, every namespace is listed by marker label
    /// and failures are collected and returned together.
    #[instrument(skip(self))]
    pub async fn list(&self, filters: &ListFilters) -> Result<Vec<Deployment>> {
        let namespaces = self.target_namespaces(filters.namespace.as_deref()).await?;

        if let Some(name) = &filters.name {
            let mut deployments = Vec::with_capacity(namespaces.len());
            for ns in &namespaces {
                let api: Api<Deployment> = Api::namespaced(self.client.clone(), ns);
                deployments.push(api.get(name).await?);
            }
            return Ok(deployments);
        }

        let lp = ListParams::default().labels(labels::MANAGED_BY_SELECTOR);
        let mut deployments = Vec::new();
        let mut errors = Vec::new();
        for ns in &namespaces {
            let api: Api<Deployment> = Api::namespaced(self.client.clone(), ns);
            match api.list(&lp).await {
                Ok(list) => {
                    debug!("Found {} deployments in {}", list.items.len(), ns);
                    deployments.extend(list.items);
                }
                Err(e) => {
                    warn!("Failed to list deployments in {}: {}", ns, e);
                    errors.push(e.into());
                }
            }
        }

        InflateError::from_accumulated(errors)?;
        Ok(deployments)
    }

    /// Delete inflate workloads and their companion Services.
    ///
    /// Refuses to run without a namespace, a name, or `all`, before any API call.
    #[instrument(skip(self))]
    pub async fn delete(&self, filters: &DeleteFilters) -> Result<()> {
        filters.validate()?;

        let namespaces = self.target_namespaces(filters.namespace.as_deref()).await?;

        if let Some(name) = &filters.name {
            for ns in &namespaces {
                self.delete_named(ns, name).await?;
            }
            return Ok(());
        }

        let mut errors = Vec::new();
        for ns in &namespaces {
            if let Err(e) = self.delete_managed(ns).await {
                warn!("Failed to delete inflates in {}: {}", ns, e);
                errors.push(e);
            }
        }
        InflateError::from_accumulated(errors)
    }

    async fn delete_named(&self, namespace: &str, name: &str) -> Result<()> {
        let dp = DeleteParams::default();

        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        deployments.delete(name, &dp).await?;
        info!("Deleted deployment {}/{}", namespace, name);

        let services: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        match services.delete(name, &dp).await {
            Ok(_) => info!("Deleted service {}/{}", namespace, name),
            Err(e) if is_not_found(&e) => debug!("No service {}/{} to delete", namespace, name),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    async fn delete_managed(&self, namespace: &str) -> Result<()> {
        let dp = DeleteParams::default();
        let lp = ListParams::default().labels(labels::MANAGED_BY_SELECTOR);

        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        deployments.delete_collection(&dp, &lp).await?;
        info!("Deleted inflate deployments in {}", namespace);

        // Services have no deletecollection endpoint
        let services: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        for svc in services.list(&lp).await?.items {
            services.delete(&svc.name_any(), &dp).await?;
            info!("Deleted service {}/{}", namespace, svc.name_any());
        }
        Ok(())
    }

    /// The explicit namespace, or every namespace carrying the marker label
    async fn target_namespaces(&self, namespace: Option<&str>) -> Result<Vec<String>> {
        match namespace {
            Some(ns) => Ok(vec![ns.to_string()]),
            None => managed_namespaces(&self.client).await,
        }
    }
}
