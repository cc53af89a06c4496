//! # Credential Provisioning
//!
//! Resolves the master password for a cluster, generating and persisting one
//! when the spec asks for it, and assembles the connection details after
//! creation.
//!
//! The get-then-create-or-update sequence is not atomic. It relies on the
//! converge engine running at most one reconcile per resource at a time; with
//! concurrent writers it would need a conditional write on the secret store.

use std::collections::BTreeMap;
use std::sync::Arc;

use k8s_openapi::api::core::v1::Secret;
use kube::api::ObjectMeta;
use tracing::{debug, info, warn};
use zeroize::{Zeroize, Zeroizing};

use crate::constants::{CONNECTION_ENDPOINT_KEY, CONNECTION_PASSWORD_KEY, CONNECTION_USERNAME_KEY};
use crate::controller::error::{
    AdapterError, ERR_GENERATE_PASSWORD, ERR_GET_PASSWORD, ERR_GET_SECRET_FAILED,
    ERR_NO_PASSWORD_SECRET_REF, ERR_SAVE_SECRET_FAILED, ERR_UPDATE_SECRET_FAILED,
};
use crate::controller::hooks::ConnectionDetails;
use crate::crd::{DBCluster, SecretKeySelector};
use crate::password::PasswordGenerator;
use crate::provider::rds::CreateDbClusterOutput;
use crate::secrets::SecretStore;

/// Obtains, generates and persists master passwords
#[derive(Clone)]
pub struct CredentialProvisioner {
    store: Arc<dyn SecretStore>,
    generator: Arc<dyn PasswordGenerator>,
}

impl std::fmt::Debug for CredentialProvisioner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialProvisioner").finish_non_exhaustive()
    }
}

impl CredentialProvisioner {
    pub fn new(store: Arc<dyn SecretStore>, generator: Arc<dyn PasswordGenerator>) -> Self {
        Self { store, generator }
    }

    /// Read the password at the spec's secret reference
    ///
    /// A missing reference, secret or key all mean "no password yet".
    pub async fn read_password(
        &self,
        selector: Option<&SecretKeySelector>,
    ) -> Result<Option<Zeroizing<String>>, AdapterError> {
        let Some(selector) = selector else {
            return Ok(None);
        };

        let secret = match self.store.get(&selector.namespace, &selector.name).await {
            Ok(secret) => secret,
            Err(e) if e.is_not_found() => {
                debug!(
                    secret.name = %selector.name,
                    secret.namespace = %selector.namespace,
                    "Password secret does not exist yet"
                );
                return Ok(None);
            }
            Err(e) => return Err(AdapterError::credential(ERR_GET_PASSWORD, e)),
        };

        secret_value(&secret, &selector.key)
            .map_err(|e| AdapterError::credential(ERR_GET_PASSWORD, e))
    }

    /// Resolve the master password for a create call
    ///
    /// An existing non-empty password is reused as is. Otherwise, when the spec
    /// asks for it, a password is generated and written to the referenced
    /// secret before it is returned. The result may be empty when no password
    /// is configured and generation is off.
    pub async fn ensure_password(&self, cr: &DBCluster) -> Result<Zeroizing<String>, AdapterError> {
        let selector = cr.spec.for_provider.master_user_password_secret_ref.as_ref();
        if let Some(existing) = self.read_password(selector).await? {
            debug!("Reusing master password from secret");
            return Ok(existing);
        }

        if !cr.autogenerates_password() {
            return Ok(Zeroizing::new(String::new()));
        }

        let password = self
            .generator
            .generate()
            .map_err(|e| AdapterError::credential(ERR_GENERATE_PASSWORD, e))?;
        info!(resource.name = cr.metadata.name.as_deref(), "Generated master password");

        self.save_password(selector, &password)
            .await
            .map_err(|e| match e {
                AdapterError::Configuration(_) => e,
                other => AdapterError::persistence(ERR_SAVE_SECRET_FAILED, other),
            })?;
        Ok(password)
    }

    /// Write `password` under the selector's key, creating the secret if absent
    pub async fn save_password(
        &self,
        selector: Option<&SecretKeySelector>,
        password: &str,
    ) -> Result<(), AdapterError> {
        let selector = selector.ok_or(AdapterError::Configuration(ERR_NO_PASSWORD_SECRET_REF))?;

        let existing = match self.store.get(&selector.namespace, &selector.name).await {
            Ok(secret) => Some(secret),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(AdapterError::persistence(ERR_GET_SECRET_FAILED, e)),
        };
        let create = existing.is_none();

        let mut secret = existing.unwrap_or_else(|| Secret {
            metadata: ObjectMeta {
                name: Some(selector.name.clone()),
                namespace: Some(selector.namespace.clone()),
                ..ObjectMeta::default()
            },
            ..Secret::default()
        });
        secret.string_data = Some(BTreeMap::from([(
            selector.key.clone(),
            password.to_string(),
        )]));

        let result = if create {
            self.store.create(&secret).await
        } else {
            self.store.update(&secret).await
        };
        scrub_string_data(&mut secret);
        result.map_err(|e| AdapterError::persistence(ERR_UPDATE_SECRET_FAILED, e))?;

        info!(
            secret.name = %selector.name,
            secret.namespace = %selector.namespace,
            operation = if create { "create" } else { "update" },
            "Saved master password to secret"
        );
        Ok(())
    }

    /// Assemble connection details after a successful create call
    ///
    /// The secret is read again because provisioning runs asynchronously to
    /// creation. When it holds no password, the pending master password from
    /// the create response is used.
    pub async fn finalize_connection(
        &self,
        cr: &DBCluster,
        output: &CreateDbClusterOutput,
    ) -> Result<ConnectionDetails, AdapterError> {
        let created = output.db_cluster();
        let endpoint = cr
            .status
            .as_ref()
            .and_then(|s| s.at_provider.as_ref())
            .and_then(|o| o.endpoint.as_deref())
            .or_else(|| created.and_then(|c| c.endpoint()))
            .unwrap_or_default();
        let username = cr.spec.for_provider.master_username.as_deref().unwrap_or_default();

        let mut conn = ConnectionDetails::from([
            (CONNECTION_ENDPOINT_KEY.to_string(), endpoint.as_bytes().to_vec()),
            (CONNECTION_USERNAME_KEY.to_string(), username.as_bytes().to_vec()),
        ]);

        let stored = self
            .read_password(cr.spec.for_provider.master_user_password_secret_ref.as_ref())
            .await?;
        let pending = created
            .and_then(|c| c.pending_modified_values())
            .and_then(|p| p.master_user_password());

        match (stored, pending) {
            (Some(password), _) => {
                conn.insert(CONNECTION_PASSWORD_KEY.to_string(), password.as_bytes().to_vec());
            }
            (None, Some(password)) => {
                conn.insert(CONNECTION_PASSWORD_KEY.to_string(), password.as_bytes().to_vec());
            }
            (None, None) => warn!(
                resource.name = cr.metadata.name.as_deref(),
                "No master password available for connection details"
            ),
        }
        Ok(conn)
    }
}

/// Wipe the plaintext values written through `string_data`
fn scrub_string_data(secret: &mut Secret) {
    if let Some(mut data) = secret.string_data.take() {
        data.values_mut().for_each(Zeroize::zeroize);
    }
}

/// Value of `key` in a secret, `None` when absent or empty
fn secret_value(secret: &Secret, key: &str) -> Result<Option<Zeroizing<String>>, std::string::FromUtf8Error> {
    if let Some(bytes) = secret.data.as_ref().and_then(|d| d.get(key)) {
        let value = Zeroizing::new(String::from_utf8(bytes.0.clone())?);
        return Ok((!value.is_empty()).then_some(value));
    }
    Ok(secret
        .string_data
        .as_ref()
        .and_then(|d| d.get(key))
        .filter(|v| !v.is_empty())
        .map(|v| Zeroizing::new(v.clone())))
}
