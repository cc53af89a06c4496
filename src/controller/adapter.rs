//! # DBCluster Adapter
//!
//! [`LifecycleHooks`] for RDS DB clusters.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info_span, Instrument};

use crate::config::AdapterConfig;
use crate::controller::credentials::CredentialProvisioner;
use crate::controller::drift;
use crate::controller::error::AdapterError;
use crate::controller::filter;
use crate::controller::hooks::{ExternalCreation, ExternalObservation, LifecycleHooks};
use crate::controller::status;
use crate::crd::{DBCluster, DBClusterObservation};
use crate::password::{PasswordGenerator, RandomPasswordGenerator};
use crate::provider::rds::{
    first_cluster, CreateDbClusterInputBuilder, CreateDbClusterOutput,
    DeleteDbClusterInputBuilder, DescribeDbClustersInputBuilder, DescribeDbClustersOutput,
    ModifyDbClusterInputBuilder, RdsDbCluster,
};
use crate::secrets::{KubeSecretStore, SecretStore};

/// Lifecycle hooks for the DBCluster resource
///
/// Stateless across invocations; the only external calls are to the secret
/// store, made from `pre_create` and `post_create`.
#[derive(Debug, Clone)]
pub struct DbClusterAdapter {
    credentials: CredentialProvisioner,
}

impl DbClusterAdapter {
    pub fn new(store: Arc<dyn SecretStore>, generator: Arc<dyn PasswordGenerator>) -> Self {
        Self {
            credentials: CredentialProvisioner::new(store, generator),
        }
    }

    /// Adapter over Kubernetes secrets with the configured password generator
    #[must_use]
    pub fn from_client(client: kube::Client, config: &AdapterConfig) -> Self {
        Self::new(
            Arc::new(KubeSecretStore::new(client)),
            Arc::new(RandomPasswordGenerator::from_config(config)),
        )
    }

    #[must_use]
    pub fn credentials(&self) -> &CredentialProvisioner {
        &self.credentials
    }
}

/// Status observation recorded from a described cluster
fn observation_of(cluster: &RdsDbCluster) -> DBClusterObservation {
    DBClusterObservation {
        status: cluster.status().map(str::to_string),
        endpoint: cluster.endpoint().map(str::to_string),
        iam_database_authentication_enabled: cluster.iam_database_authentication_enabled(),
        db_cluster_identifier: cluster.db_cluster_identifier().map(str::to_string),
    }
}

fn hook_span(operation: &'static str, cr: &DBCluster) -> tracing::Span {
    info_span!(
        "dbcluster.hook",
        operation = operation,
        resource.name = cr.metadata.name.as_deref(),
        resource.namespace = cr.metadata.namespace.as_deref(),
        external_name = %cr.external_name()
    )
}

#[async_trait]
impl LifecycleHooks for DbClusterAdapter {
    type Resource = DBCluster;
    type DescribeInput = DescribeDbClustersInputBuilder;
    type DescribeOutput = DescribeDbClustersOutput;
    type CreateInput = CreateDbClusterInputBuilder;
    type CreateOutput = CreateDbClusterOutput;
    type UpdateInput = ModifyDbClusterInputBuilder;
    type DeleteInput = DeleteDbClusterInputBuilder;

    fn pre_observe(
        &self,
        cr: &DBCluster,
        input: DescribeDbClustersInputBuilder,
    ) -> Result<DescribeDbClustersInputBuilder, AdapterError> {
        let _guard = hook_span("pre_observe", cr).entered();
        debug!("Shaped describe request");
        Ok(input.db_cluster_identifier(cr.external_name()))
    }

    fn post_observe(
        &self,
        cr: &mut DBCluster,
        response: Result<&DescribeDbClustersOutput, AdapterError>,
        observation: ExternalObservation,
    ) -> Result<ExternalObservation, AdapterError> {
        let response = response?;
        let _guard = hook_span("post_observe", cr).entered();

        let Some(cluster) = first_cluster(response) else {
            debug!("Describe response contained no DB clusters, conditions unchanged");
            return Ok(observation);
        };

        let status = cr.status.get_or_insert_with(Default::default);
        status.at_provider = Some(observation_of(cluster));
        let provider_status = cluster.status().unwrap_or_default();
        if let Some(kind) = status::apply_status(status, provider_status) {
            debug!(
                provider_status = provider_status,
                condition = kind.as_str(),
                "Set Ready condition from provider status"
            );
        }
        Ok(observation)
    }

    fn is_up_to_date(
        &self,
        cr: &DBCluster,
        response: &DescribeDbClustersOutput,
    ) -> Result<bool, AdapterError> {
        let _guard = hook_span("is_up_to_date", cr).entered();
        let cluster = first_cluster(response)
            .ok_or_else(|| AdapterError::provider("describe response contained no DB clusters"))?;
        let up_to_date = drift::is_up_to_date(&cr.spec.for_provider, cluster);
        debug!(up_to_date = up_to_date, "Checked DB cluster drift");
        Ok(up_to_date)
    }

    async fn pre_create(
        &self,
        cr: &DBCluster,
        input: CreateDbClusterInputBuilder,
    ) -> Result<CreateDbClusterInputBuilder, AdapterError> {
        async move {
            let password = self.credentials.ensure_password(cr).await?;
            debug!(
                security_groups = cr.spec.for_provider.vpc_security_group_ids.len(),
                "Shaped create request"
            );
            Ok::<_, AdapterError>(input
                .master_user_password(password.as_str())
                .db_cluster_identifier(cr.external_name())
                .set_vpc_security_group_ids(Some(
                    cr.spec.for_provider.vpc_security_group_ids.clone(),
                )))
        }
        .instrument(hook_span("pre_create", cr))
        .await
    }

    async fn post_create(
        &self,
        cr: &DBCluster,
        response: Result<&CreateDbClusterOutput, AdapterError>,
        _creation: ExternalCreation,
    ) -> Result<ExternalCreation, AdapterError> {
        let response = response?;
        async move {
            let connection_details = self.credentials.finalize_connection(cr, response).await?;
            debug!(keys = connection_details.len(), "Assembled connection details");
            Ok::<_, AdapterError>(ExternalCreation { connection_details })
        }
        .instrument(hook_span("post_create", cr))
        .await
    }

    fn pre_update(
        &self,
        cr: &DBCluster,
        input: ModifyDbClusterInputBuilder,
    ) -> Result<ModifyDbClusterInputBuilder, AdapterError> {
        let _guard = hook_span("pre_update", cr).entered();
        debug!(apply_immediately = ?cr.spec.for_provider.apply_immediately, "Shaped modify request");
        Ok(input
            .db_cluster_identifier(cr.external_name())
            .set_apply_immediately(cr.spec.for_provider.apply_immediately))
    }

    fn pre_delete(
        &self,
        cr: &DBCluster,
        input: DeleteDbClusterInputBuilder,
    ) -> Result<(DeleteDbClusterInputBuilder, bool), AdapterError> {
        let _guard = hook_span("pre_delete", cr).entered();
        let params = &cr.spec.for_provider;
        debug!(skip_final_snapshot = params.skip_final_snapshot, "Shaped delete request");
        let input = input
            .db_cluster_identifier(cr.external_name())
            .set_final_db_snapshot_identifier(params.final_db_snapshot_identifier.clone())
            .skip_final_snapshot(params.skip_final_snapshot);
        Ok((input, false))
    }

    fn filter_list(&self, cr: &DBCluster, response: &DescribeDbClustersOutput) -> DescribeDbClustersOutput {
        filter::filter_list(&cr.external_name(), response)
    }
}
