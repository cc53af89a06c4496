//! # Drift Detection
//!
//! Decides whether the observed cluster already matches the desired spec.

use crate::controller::status::ProviderStatus;
use crate::crd::DBClusterParameters;
use crate::provider::rds::RdsDbCluster;

/// Whether `observed` is up to date with `desired`
///
/// While RDS is applying a change the cluster is reported up to date so no
/// overlapping modify call is issued; it is re-checked on the next observe.
/// Otherwise only IAM database authentication drives updates.
#[must_use]
pub fn is_up_to_date(desired: &DBClusterParameters, observed: &RdsDbCluster) -> bool {
    let status = ProviderStatus::parse(observed.status().unwrap_or_default());
    if status.change_in_flight() {
        return true;
    }

    desired.enable_iam_database_authentication.unwrap_or(false)
        == observed.iam_database_authentication_enabled().unwrap_or(false)
}
