//! Common test utilities for adapter integration tests
//!
//! Provides an in-memory secret store, a scripted password generator and
//! DBCluster fixtures.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dbcluster_controller::controller::DbClusterAdapter;
use dbcluster_controller::crd::{DBCluster, DBClusterSpec, SecretKeySelector};
use dbcluster_controller::password::{PasswordError, PasswordGenerator};
use dbcluster_controller::secrets::{SecretStore, SecretStoreError};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use zeroize::Zeroizing;

pub const NAMESPACE: &str = "db";
pub const SECRET_NAME: &str = "orders-db-password";
pub const SECRET_KEY: &str = "password";

/// Which store operation should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Get,
    Create,
    Update,
}

/// Secret store double keyed by namespace/name
///
/// Written `string_data` is folded into `data` the way the API server does.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    secrets: Mutex<HashMap<(String, String), Secret>>,
    pub gets: AtomicUsize,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    fail_on: Mutex<Option<FailOn>>,
    fail_get_at: Mutex<Option<usize>>,
}

impl InMemorySecretStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store seeded with a password secret
    pub fn with_password(password: &str) -> Arc<Self> {
        let store = Self::default();
        store.insert(password_secret(password));
        Arc::new(store)
    }

    pub fn insert(&self, secret: Secret) {
        let key = (
            secret.metadata.namespace.clone().unwrap_or_default(),
            secret.metadata.name.clone().unwrap_or_default(),
        );
        self.secrets.lock().unwrap().insert(key, secret);
    }

    pub fn fail_on(&self, op: FailOn) {
        *self.fail_on.lock().unwrap() = Some(op);
    }

    /// Fail only the `nth` get (1-based); other gets succeed
    pub fn fail_nth_get(&self, nth: usize) {
        *self.fail_get_at.lock().unwrap() = Some(nth);
    }

    pub fn writes(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst)
    }

    /// Decoded value of `key` in the stored secret
    pub fn value(&self, namespace: &str, name: &str, key: &str) -> Option<String> {
        let secrets = self.secrets.lock().unwrap();
        let secret = secrets.get(&(namespace.to_string(), name.to_string()))?;
        let bytes = secret.data.as_ref()?.get(key)?;
        String::from_utf8(bytes.0.clone()).ok()
    }

    fn check(&self, op: FailOn) -> Result<(), SecretStoreError> {
        if *self.fail_on.lock().unwrap() == Some(op) {
            return Err(SecretStoreError::Invalid(format!("injected {op:?} failure")));
        }
        Ok(())
    }

    fn persist(&self, secret: &Secret) {
        let mut stored = secret.clone();
        let mut data = stored.data.take().unwrap_or_default();
        for (k, v) in stored.string_data.take().unwrap_or_default() {
            data.insert(k, ByteString(v.into_bytes()));
        }
        stored.data = Some(data);
        self.insert(stored);
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, SecretStoreError> {
        let nth = self.gets.fetch_add(1, Ordering::SeqCst) + 1;
        self.check(FailOn::Get)?;
        if *self.fail_get_at.lock().unwrap() == Some(nth) {
            return Err(SecretStoreError::Invalid(format!("injected failure on get #{nth}")));
        }
        self.secrets
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| SecretStoreError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }

    async fn create(&self, secret: &Secret) -> Result<(), SecretStoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::Create)?;
        self.persist(secret);
        Ok(())
    }

    async fn update(&self, secret: &Secret) -> Result<(), SecretStoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::Update)?;
        self.persist(secret);
        Ok(())
    }
}

/// Generator returning a fixed password and counting calls
#[derive(Debug)]
pub struct ScriptedGenerator {
    password: String,
    pub calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(password: &str) -> Arc<Self> {
        Arc::new(Self {
            password: password.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PasswordGenerator for ScriptedGenerator {
    fn generate(&self) -> Result<Zeroizing<String>, PasswordError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Zeroizing::new(self.password.clone()))
    }
}

/// Generator whose random source always fails
#[derive(Debug)]
pub struct FailingGenerator;

impl PasswordGenerator for FailingGenerator {
    fn generate(&self) -> Result<Zeroizing<String>, PasswordError> {
        Err(PasswordError::RandomSource(rand::Error::new(
            std::io::Error::other("no entropy"),
        )))
    }
}

pub fn adapter(store: &Arc<InMemorySecretStore>, generator: Arc<dyn PasswordGenerator>) -> DbClusterAdapter {
    DbClusterAdapter::new(Arc::clone(store) as Arc<dyn SecretStore>, generator)
}

pub fn password_selector() -> SecretKeySelector {
    SecretKeySelector {
        name: SECRET_NAME.to_string(),
        namespace: NAMESPACE.to_string(),
        key: SECRET_KEY.to_string(),
    }
}

pub fn password_secret(password: &str) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(SECRET_NAME.to_string()),
            namespace: Some(NAMESPACE.to_string()),
            ..ObjectMeta::default()
        },
        data: Some(BTreeMap::from([(
            SECRET_KEY.to_string(),
            ByteString(password.as_bytes().to_vec()),
        )])),
        ..Secret::default()
    }
}

/// DBCluster `orders` in namespace `db` with external name `orders-prod`
pub fn cluster() -> DBCluster {
    let mut cr = DBCluster::new("orders", DBClusterSpec::default());
    cr.metadata.namespace = Some(NAMESPACE.to_string());
    cr.metadata.annotations = Some(BTreeMap::from([(
        "crossplane.io/external-name".to_string(),
        "orders-prod".to_string(),
    )]));
    cr.spec.for_provider.master_username = Some("admin".to_string());
    cr.spec.for_provider.master_user_password_secret_ref = Some(password_selector());
    cr
}

/// Cluster that asks for a generated password
pub fn autogenerating_cluster() -> DBCluster {
    let mut cr = cluster();
    cr.spec.for_provider.autogenerate_password = Some(true);
    cr
}
