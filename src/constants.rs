// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label keys and values stamped on every object inflate creates
pub mod labels {
    /// Identifies the workload; its value is the object name
    pub const APP: &str = "app";
    /// Marker label used to find inflate-managed objects
    pub const MANAGED_BY: &str = "managed-by";
    pub const MANAGED_BY_VALUE: &str = "inflate";
    /// Label selector matching the marker label
    pub const MANAGED_BY_SELECTOR: &str = "managed-by=inflate";
}

/// Well-known node labels used for scheduling
pub mod topology {
    pub const ZONE: &str = "topology.kubernetes.io/zone";
    pub const HOSTNAME: &str = "kubernetes.io/hostname";
    pub const CAPACITY_TYPE: &str = "karpenter.sh/capacity-type";
    pub const ARCH: &str = "kubernetes.io/arch";
    pub const OS: &str = "kubernetes.io/os";
    pub const DO_NOT_SCHEDULE: &str = "DoNotSchedule";
}

/// Defaults applied when an option is not given
pub mod defaults {
    pub const NAME: &str = "inflate";
    pub const NAMESPACE: &str = "inflate";
    pub const IMAGE: &str = "public.ecr.aws/eks-distro/kubernetes/pause:3.7";
    /// Exclusive upper bound of the random name suffix
    pub const SUFFIX_BOUND: u64 = 9_999_999_999;
}

/// Fixed container footprint
pub mod resources {
    pub const CPU_REQUEST: &str = "1";
    pub const MEMORY_REQUEST: &str = "256";
}

/// Service exposure
pub mod service {
    pub const PORT: i32 = 80;
    pub const PROTOCOL: &str = "TCP";
}

/// Deadline applied to a whole command when none is given
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
