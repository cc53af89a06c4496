//! # Controller
//!
//! The DBCluster lifecycle adapter plugged into the converge engine.
//!
//! - `hooks`: the lifecycle seam between the engine and a resource kind
//! - `adapter`: hooks for RDS DB clusters
//! - `status`: provider status to condition mapping
//! - `drift`: up-to-date check
//! - `credentials`: master password provisioning and connection details
//! - `filter`: narrowing describe responses to one cluster
//! - `error`: error taxonomy returned to the engine

pub mod adapter;
pub mod credentials;
pub mod drift;
pub mod error;
pub mod filter;
pub mod hooks;
pub mod status;

pub use adapter::DbClusterAdapter;
pub use credentials::CredentialProvisioner;
pub use error::AdapterError;
pub use hooks::{ConnectionDetails, ExternalCreation, ExternalObservation, LifecycleHooks};
pub use status::{ConditionKind, ProviderStatus};
