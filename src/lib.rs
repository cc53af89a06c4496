//! DBCluster Controller Library
//!
//! Lifecycle hooks that adapt a generic managed-resource converge loop to
//! AWS RDS DB clusters: status interpretation, drift detection, master
//! password provisioning, delete-time snapshot policy and describe-response
//! filtering.
//!
//! ## Quick Start
//!
//! ```rust
//! use dbcluster_controller::prelude::*;
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod crd;
pub mod observability;
pub mod password;
pub mod prelude;
pub mod provider;
pub mod secrets;
