//! # Kubernetes Secret Store
//!
//! [`SecretStore`] backed by core/v1 Secrets.

use super::{secret_coordinates, SecretStore, SecretStoreError};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::api::{Api, PostParams};
use kube::Client;
use tracing::debug;

/// Secret store over the Kubernetes API
#[derive(Clone)]
pub struct KubeSecretStore {
    client: Client,
}

impl std::fmt::Debug for KubeSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeSecretStore").finish_non_exhaustive()
    }
}

impl KubeSecretStore {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Secret> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, SecretStoreError> {
        match self.api(namespace).get(name).await {
            Ok(secret) => Ok(secret),
            Err(kube::Error::Api(api_err)) if api_err.code == 404 => {
                debug!("Secret {}/{} not found", namespace, name);
                Err(SecretStoreError::NotFound {
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                })
            }
            Err(e) => Err(SecretStoreError::Api(e)),
        }
    }

    async fn create(&self, secret: &Secret) -> Result<(), SecretStoreError> {
        let (namespace, name) = secret_coordinates(secret)?;
        self.api(namespace)
            .create(&PostParams::default(), secret)
            .await?;
        debug!("Created secret {}/{}", namespace, name);
        Ok(())
    }

    async fn update(&self, secret: &Secret) -> Result<(), SecretStoreError> {
        let (namespace, name) = secret_coordinates(secret)?;
        self.api(namespace)
            .replace(name, &PostParams::default(), secret)
            .await?;
        debug!("Updated secret {}/{}", namespace, name);
        Ok(())
    }
}
