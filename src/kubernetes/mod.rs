// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace management, and idempotent apply.

pub mod apply;
pub mod client;
pub mod namespaces;

pub use apply::create_or_replace;
pub use client::create_client;
pub use namespaces::{ensure_namespace_exists, managed_namespaces};
