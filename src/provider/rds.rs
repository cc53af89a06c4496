//! # RDS DB Cluster Shapes
//!
//! `aws-sdk-rds` input builders and outputs for the DB cluster operations.

pub use aws_sdk_rds::operation::create_db_cluster::builders::CreateDbClusterInputBuilder;
pub use aws_sdk_rds::operation::create_db_cluster::CreateDbClusterOutput;
pub use aws_sdk_rds::operation::delete_db_cluster::builders::DeleteDbClusterInputBuilder;
pub use aws_sdk_rds::operation::describe_db_clusters::builders::DescribeDbClustersInputBuilder;
pub use aws_sdk_rds::operation::describe_db_clusters::DescribeDbClustersOutput;
pub use aws_sdk_rds::operation::modify_db_cluster::builders::ModifyDbClusterInputBuilder;
pub use aws_sdk_rds::types::DbCluster as RdsDbCluster;

/// First cluster of a describe response
#[must_use]
pub fn first_cluster(output: &DescribeDbClustersOutput) -> Option<&RdsDbCluster> {
    output.db_clusters().first()
}
