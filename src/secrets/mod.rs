//! # Secret Store
//!
//! Namespaced key-value persistence for master passwords.
//!
//! The adapter reads the password secret before generating one and upserts it
//! after generation. `NotFound` is a distinct error kind so callers can treat
//! an absent secret as "no value yet".

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use thiserror::Error;

mod kubernetes;

pub use kubernetes::KubeSecretStore;

/// Errors returned by a [`SecretStore`]
#[derive(Debug, Error)]
pub enum SecretStoreError {
    /// The secret does not exist
    #[error("secret {namespace}/{name} not found")]
    NotFound { namespace: String, name: String },
    /// The Kubernetes API rejected the request
    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),
    /// The secret object is unusable (missing name or namespace)
    #[error("invalid secret: {0}")]
    Invalid(String),
}

impl SecretStoreError {
    /// Whether the error only says the secret is absent
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Secret store trait
///
/// Implemented over the Kubernetes API for production and by in-memory
/// doubles in tests. Cancellation is by dropping the returned future.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch a secret; absent secrets yield [`SecretStoreError::NotFound`]
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, SecretStoreError>;

    /// Create a new secret; name and namespace come from its metadata
    async fn create(&self, secret: &Secret) -> Result<(), SecretStoreError>;

    /// Replace an existing secret; name and namespace come from its metadata
    async fn update(&self, secret: &Secret) -> Result<(), SecretStoreError>;
}

/// Name and namespace of a secret object, both required
pub(crate) fn secret_coordinates(secret: &Secret) -> Result<(&str, &str), SecretStoreError> {
    let name = secret
        .metadata
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| SecretStoreError::Invalid("secret has no name".to_string()))?;
    let namespace = secret
        .metadata
        .namespace
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| SecretStoreError::Invalid(format!("secret {name} has no namespace")))?;
    Ok((namespace, name))
}
