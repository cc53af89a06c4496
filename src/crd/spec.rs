//! # DBCluster Spec
//!
//! Main CRD specification types.

use serde::{Deserialize, Serialize};

use crate::constants::EXTERNAL_NAME_ANNOTATION;

/// DBCluster Custom Resource Definition
///
/// Declares the desired state of an AWS RDS DB cluster. The converge engine
/// drives the external cluster toward this spec; the adapter in
/// [`crate::controller`] customises each lifecycle step.
///
/// # Example
///
/// ```yaml
/// apiVersion: rds.aws.crossplane.io/v1alpha1
/// kind: DBCluster
/// metadata:
///   name: orders-db
///   annotations:
///     crossplane.io/external-name: orders-prod
/// spec:
///   forProvider:
///     masterUsername: admin
///     autogeneratePassword: true
///     masterUserPasswordSecretRef:
///       name: orders-db-password
///       namespace: default
///       key: password
///     vpcSecurityGroupIDs: ["sg-0a1b2c"]
///     skipFinalSnapshot: true
///   writeConnectionSecretToRef:
///     name: orders-db-conn
///     namespace: default
/// ```
#[derive(kube::CustomResource, Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "DBCluster",
    group = "rds.aws.crossplane.io",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::DBClusterStatus",
    shortname = "dbc",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}, {"name":"Status", "type":"string", "jsonPath":".status.atProvider.status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct DBClusterSpec {
    /// Provider-facing parameters of the cluster
    pub for_provider: DBClusterParameters,
    /// Where the converge engine writes the connection details after creation
    #[serde(default, rename = "writeConnectionSecretToRef")]
    pub write_connection_secret_to_reference: Option<crate::crd::SecretReference>,
}

/// Desired configuration of the cluster as declared by the user
#[derive(Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DBClusterParameters {
    /// Name of the master user
    #[serde(default)]
    pub master_username: Option<String>,
    /// Secret key holding the master password
    /// When `autogeneratePassword` is set and the key is empty, the generated
    /// password is written here
    #[serde(default)]
    pub master_user_password_secret_ref: Option<crate::crd::SecretKeySelector>,
    /// Generate a master password when none is found at the secret reference
    #[serde(default)]
    pub autogenerate_password: Option<bool>,
    /// VPC security groups to associate with the cluster
    #[serde(default, rename = "vpcSecurityGroupIDs")]
    pub vpc_security_group_ids: Vec<String>,
    /// Map IAM accounts to database accounts
    #[serde(default, rename = "enableIAMDatabaseAuthentication")]
    pub enable_iam_database_authentication: Option<bool>,
    /// Apply modifications immediately instead of in the next maintenance window
    #[serde(default)]
    pub apply_immediately: Option<bool>,
    /// Identifier of the snapshot taken when the cluster is deleted
    #[serde(default, rename = "finalDBSnapshotIdentifier")]
    pub final_db_snapshot_identifier: Option<String>,
    /// Skip the final snapshot on delete
    #[serde(default)]
    pub skip_final_snapshot: bool,
}

impl DBCluster {
    /// Stable external-facing name of the cluster
    ///
    /// Read from the external-name annotation, falling back to the object name.
    #[must_use]
    pub fn external_name(&self) -> String {
        self.metadata
            .annotations
            .as_ref()
            .and_then(|a| a.get(EXTERNAL_NAME_ANNOTATION))
            .filter(|name| !name.is_empty())
            .or(self.metadata.name.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a password should be generated when none exists yet
    #[must_use]
    pub fn autogenerates_password(&self) -> bool {
        self.spec.for_provider.autogenerate_password.unwrap_or(false)
    }
}
