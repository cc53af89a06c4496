//! # List Filtering
//!
//! DescribeDBClusters may return clusters unrelated to the resource; narrow
//! the response to the one cluster the resource manages.

use crate::provider::rds::DescribeDbClustersOutput;

/// Keep only the cluster whose identifier equals `identifier`
///
/// Identifiers are unique, so matching stops at the first hit. No match
/// yields an empty response.
#[must_use]
pub fn filter_list(identifier: &str, output: &DescribeDbClustersOutput) -> DescribeDbClustersOutput {
    let matched = output
        .db_clusters()
        .iter()
        .find(|cluster| cluster.db_cluster_identifier() == Some(identifier))
        .cloned();

    DescribeDbClustersOutput::builder()
        .set_db_clusters(Some(matched.into_iter().collect()))
        .build()
}
