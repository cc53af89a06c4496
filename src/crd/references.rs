//! # References
//!
//! References from a DBCluster to Kubernetes secrets.

use serde::{Deserialize, Serialize};

/// Reference to a secret
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    /// Name of the secret
    pub name: String,
    /// Namespace of the secret
    pub namespace: String,
}

/// Reference to a single key of a secret
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeySelector {
    /// Name of the secret
    pub name: String,
    /// Namespace of the secret
    pub namespace: String,
    /// Key within the secret data
    pub key: String,
}
