//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use dbcluster_controller::prelude::*;
//! ```

// CRD types - most commonly used
pub use crate::crd::*;

// Hooks seam and the DBCluster adapter
pub use crate::controller::{
    AdapterError, ConditionKind, ConnectionDetails, DbClusterAdapter, ExternalCreation,
    ExternalObservation, LifecycleHooks, ProviderStatus,
};

// Collaborator traits - needed for wiring the adapter
pub use crate::password::{PasswordGenerator, RandomPasswordGenerator};
pub use crate::secrets::{KubeSecretStore, SecretStore, SecretStoreError};

// Config types
pub use crate::config::AdapterConfig;
