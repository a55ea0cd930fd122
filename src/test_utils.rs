// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Route = (String, String);
type Recorded = (String, String, String);

/// A mock HTTP service that returns predefined responses for exact method and path
/// pairs and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Route, (u16, String)>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Every (method, path) received so far, in order
    pub fn requests(&self) -> Vec<Route> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(method, path, _)| (method.clone(), path.clone()))
            .collect()
    }

    /// Query strings of every request matching method and path, in order
    pub fn queries(&self, method: &str, path: &str) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, p, _)| m == method && p == path)
            .map(|(_, _, query)| query.clone())
            .collect()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let route = (req.method().to_string(), req.uri().path().to_string());
        let query = req.uri().query().unwrap_or_default().to_string();
        self.requests
            .lock()
            .unwrap()
            .push((route.0.clone(), route.1.clone(), query));

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(&route)
            .cloned()
            .unwrap_or_else(|| (404, not_found_json("resource", &route.1)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

pub fn namespace_json(name: &str) -> String {
    namespace_value(name).to_string()
}

pub fn namespace_list_json(names: &[&str]) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "NamespaceList",
        "metadata": {},
        "items": names.iter().map(|n| namespace_value(n)).collect::<Vec<_>>()
    })
    .to_string()
}

fn namespace_value(name: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": format!("uid-{}", name),
            "labels": { "managed-by": "inflate" }
        }
    })
}

pub fn deployment_json(namespace: &str, name: &str) -> String {
    deployment_value(namespace, name).to_string()
}

/// A DeploymentList from (namespace, name) pairs
pub fn deployment_list_json(items: &[(&str, &str)]) -> String {
    serde_json::json!({
        "apiVersion": "apps/v1",
        "kind": "DeploymentList",
        "metadata": { "resourceVersion": "1" },
        "items": items.iter().map(|(ns, n)| deployment_value(ns, n)).collect::<Vec<_>>()
    })
    .to_string()
}

fn deployment_value(namespace: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "resourceVersion": "42",
            "labels": { "app": name, "managed-by": "inflate" }
        },
        "spec": {
            "replicas": 0,
            "selector": { "matchLabels": { "app": name, "managed-by": "inflate" } },
            "template": {
                "metadata": { "labels": { "app": name, "managed-by": "inflate" } },
                "spec": {
                    "containers": [{
                        "name": name,
                        "image": "public.ecr.aws/eks-distro/kubernetes/pause:3.7"
                    }]
                }
            }
        }
    })
}

pub fn service_json(namespace: &str, name: &str) -> String {
    service_value(namespace, name).to_string()
}

pub fn service_list_json(items: &[(&str, &str)]) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ServiceList",
        "metadata": { "resourceVersion": "1" },
        "items": items.iter().map(|(ns, n)| service_value(ns, n)).collect::<Vec<_>>()
    })
    .to_string()
}

fn service_value(namespace: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "resourceVersion": "7",
            "labels": { "app": name, "managed-by": "inflate" }
        },
        "spec": {
            "selector": { "app": name, "managed-by": "inflate" },
            "ports": [{ "port": 80, "targetPort": 80, "protocol": "TCP" }]
        }
    })
}

/// A successful Status, as returned by delete calls
pub fn status_success_json() -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Success"
    })
    .to_string()
}

pub fn not_found_json(resource: &str, name: &str) -> String {
    failure_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

pub fn already_exists_json(resource: &str, name: &str) -> String {
    failure_json(409, "AlreadyExists", &format!("{} \"{}\" already exists", resource, name))
}

pub fn forbidden_json(resource: &str, name: &str) -> String {
    failure_json(403, "Forbidden", &format!("{} \"{}\" is forbidden", resource, name))
}

fn failure_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
