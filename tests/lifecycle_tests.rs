//! # Lifecycle Hook Tests
//!
//! Observe, drift, update, delete and list filtering through the adapter.

mod common;

use common::{adapter, cluster, InMemorySecretStore, ScriptedGenerator};
use dbcluster_controller::prelude::*;
use dbcluster_controller::provider::rds::{
    DeleteDbClusterInputBuilder, DescribeDbClustersInputBuilder, DescribeDbClustersOutput,
    ModifyDbClusterInputBuilder, RdsDbCluster,
};

fn hooks() -> DbClusterAdapter {
    adapter(&InMemorySecretStore::new(), ScriptedGenerator::new("unused"))
}

fn described(status: &str, iam: Option<bool>) -> DescribeDbClustersOutput {
    DescribeDbClustersOutput::builder()
        .db_clusters(
            RdsDbCluster::builder()
                .db_cluster_identifier("orders-prod")
                .status(status)
                .endpoint("orders.cluster.rds")
                .set_iam_database_authentication_enabled(iam)
                .build(),
        )
        .build()
}

fn listing(ids: &[&str]) -> DescribeDbClustersOutput {
    DescribeDbClustersOutput::builder()
        .set_db_clusters(Some(
            ids.iter()
                .map(|id| RdsDbCluster::builder().db_cluster_identifier(*id).build())
                .collect(),
        ))
        .build()
}

fn ready(cr: &DBCluster) -> Option<&Condition> {
    cr.status.as_ref().and_then(|s| s.condition("Ready"))
}

#[test]
fn test_pre_observe_targets_external_name() {
    let input = hooks()
        .pre_observe(&cluster(), DescribeDbClustersInputBuilder::default())
        .unwrap();
    assert_eq!(input.get_db_cluster_identifier().as_deref(), Some("orders-prod"));
}

#[test]
fn test_pre_observe_falls_back_to_object_name() {
    let mut cr = cluster();
    cr.metadata.annotations = None;
    let input = hooks()
        .pre_observe(&cr, DescribeDbClustersInputBuilder::default())
        .unwrap();
    assert_eq!(input.get_db_cluster_identifier().as_deref(), Some("orders"));
}

#[test]
fn test_post_observe_sets_ready_condition() {
    let cases = [
        ("available", "True", "Available"),
        ("modifying", "True", "Available"),
        ("creating", "False", "Creating"),
        ("deleting", "False", "Unavailable"),
        ("stopped", "False", "Unavailable"),
        ("stopping", "False", "Unavailable"),
    ];
    for (provider_status, status, reason) in cases {
        let mut cr = cluster();
        let observation = ExternalObservation {
            resource_exists: true,
            ..ExternalObservation::default()
        };

        let result = hooks()
            .post_observe(&mut cr, Ok(&described(provider_status, None)), observation.clone())
            .unwrap();

        assert_eq!(result, observation, "status {provider_status}");
        let condition = ready(&cr).expect("Ready condition");
        assert_eq!(condition.status, status, "status {provider_status}");
        assert_eq!(condition.reason.as_deref(), Some(reason), "status {provider_status}");
    }
}

#[test]
fn test_post_observe_records_observation() {
    let mut cr = cluster();
    hooks()
        .post_observe(&mut cr, Ok(&described("available", Some(true))), ExternalObservation::default())
        .unwrap();

    let at_provider = cr.status.as_ref().and_then(|s| s.at_provider.as_ref()).unwrap();
    assert_eq!(at_provider.status.as_deref(), Some("available"));
    assert_eq!(at_provider.endpoint.as_deref(), Some("orders.cluster.rds"));
    assert_eq!(at_provider.iam_database_authentication_enabled, Some(true));
    assert_eq!(at_provider.db_cluster_identifier.as_deref(), Some("orders-prod"));
}

#[test]
fn test_post_observe_unmapped_status_leaves_conditions() {
    let adapter = hooks();
    let mut cr = cluster();
    adapter
        .post_observe(&mut cr, Ok(&described("available", None)), ExternalObservation::default())
        .unwrap();
    let before = ready(&cr).cloned();

    adapter
        .post_observe(&mut cr, Ok(&described("backing-up", None)), ExternalObservation::default())
        .unwrap();

    assert_eq!(ready(&cr).cloned(), before);
}

#[test]
fn test_post_observe_propagates_error_untouched() {
    let mut cr = cluster();
    let err = hooks()
        .post_observe(
            &mut cr,
            Err(AdapterError::provider("DBClusterNotFoundFault")),
            ExternalObservation::default(),
        )
        .unwrap_err();

    assert_eq!(err.to_string(), "DBClusterNotFoundFault");
    assert!(cr.status.is_none());
}

#[test]
fn test_post_observe_empty_response_is_noop() {
    let mut cr = cluster();
    let observation = ExternalObservation {
        resource_exists: true,
        resource_up_to_date: true,
        ..ExternalObservation::default()
    };

    let result = hooks()
        .post_observe(&mut cr, Ok(&listing(&[])), observation.clone())
        .unwrap();

    assert_eq!(result, observation);
    assert!(cr.status.is_none());
}

#[test]
fn test_is_up_to_date() {
    let adapter = hooks();
    let mut cr = cluster();
    cr.spec.for_provider.enable_iam_database_authentication = Some(true);

    assert!(adapter.is_up_to_date(&cr, &described("available", Some(true))).unwrap());
    assert!(!adapter.is_up_to_date(&cr, &described("available", Some(false))).unwrap());
    assert!(adapter.is_up_to_date(&cr, &described("modifying", Some(false))).unwrap());
}

#[test]
fn test_is_up_to_date_absent_flags_match() {
    assert!(hooks().is_up_to_date(&cluster(), &described("available", None)).unwrap());
}

#[test]
fn test_is_up_to_date_empty_response_is_error() {
    let err = hooks().is_up_to_date(&cluster(), &listing(&[])).unwrap_err();
    assert!(matches!(err, AdapterError::Provider(_)));
}

#[test]
fn test_pre_update_sets_identifier_and_apply_immediately() {
    let adapter = hooks();
    let mut cr = cluster();

    let input = adapter
        .pre_update(&cr, ModifyDbClusterInputBuilder::default())
        .unwrap();
    assert_eq!(input.get_db_cluster_identifier().as_deref(), Some("orders-prod"));
    assert_eq!(*input.get_apply_immediately(), None);

    cr.spec.for_provider.apply_immediately = Some(true);
    let input = adapter
        .pre_update(&cr, ModifyDbClusterInputBuilder::default())
        .unwrap();
    assert_eq!(*input.get_apply_immediately(), Some(true));
}

#[test]
fn test_pre_delete_passes_snapshot_settings_verbatim() {
    let mut cr = cluster();
    cr.spec.for_provider.final_db_snapshot_identifier = Some("orders-final".to_string());
    cr.spec.for_provider.skip_final_snapshot = false;

    let (input, done) = hooks()
        .pre_delete(&cr, DeleteDbClusterInputBuilder::default())
        .unwrap();

    assert!(!done);
    assert_eq!(input.get_db_cluster_identifier().as_deref(), Some("orders-prod"));
    assert_eq!(input.get_final_db_snapshot_identifier().as_deref(), Some("orders-final"));
    assert_eq!(*input.get_skip_final_snapshot(), Some(false));
}

#[test]
fn test_pre_delete_skip_snapshot() {
    let mut cr = cluster();
    cr.spec.for_provider.skip_final_snapshot = true;

    let (input, done) = hooks()
        .pre_delete(&cr, DeleteDbClusterInputBuilder::default())
        .unwrap();

    assert!(!done);
    assert_eq!(*input.get_final_db_snapshot_identifier(), None);
    assert_eq!(*input.get_skip_final_snapshot(), Some(true));
}

#[test]
fn test_filter_list_keeps_matching_cluster() {
    let mut cr = cluster();
    cr.metadata.annotations = Some(
        [("crossplane.io/external-name".to_string(), "b".to_string())].into(),
    );

    let filtered = hooks().filter_list(&cr, &listing(&["a", "b", "c"]));

    let ids: Vec<_> = filtered
        .db_clusters()
        .iter()
        .map(|c| c.db_cluster_identifier().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn test_filter_list_without_match_is_empty() {
    let filtered = hooks().filter_list(&cluster(), &listing(&["a", "b", "c"]));
    assert!(filtered.db_clusters().is_empty());
}
