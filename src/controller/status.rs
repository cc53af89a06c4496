//! # Status Mapping
//!
//! Translates the lifecycle status RDS reports for a cluster into the
//! resource's `Ready` condition.
//!
//! RDS reports far more states than the three conditions distinguish
//! (backing-up, maintenance, failed states, ...). Those parse to
//! [`ProviderStatus::Unmapped`] and leave the conditions untouched rather than
//! guessing an availability class.

use crate::constants::CONDITION_TYPE_READY;
use crate::crd::{Condition, DBClusterStatus};
use tracing::debug;

/// Lifecycle status of a DB cluster as reported by RDS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    Available,
    Modifying,
    Creating,
    Deleting,
    Stopped,
    Stopping,
    Upgrading,
    ConfiguringIamDatabaseAuth,
    /// Any status without a defined condition mapping
    Unmapped(String),
}

impl ProviderStatus {
    #[must_use]
    pub fn parse(status: &str) -> Self {
        match status {
            "available" => Self::Available,
            "modifying" => Self::Modifying,
            "creating" => Self::Creating,
            "deleting" => Self::Deleting,
            "stopped" => Self::Stopped,
            "stopping" => Self::Stopping,
            "upgrading" => Self::Upgrading,
            "configuring-iam-database-auth" => Self::ConfiguringIamDatabaseAuth,
            other => Self::Unmapped(other.to_string()),
        }
    }

    /// Condition this status maps to, `None` when the condition must not change
    #[must_use]
    pub fn condition(&self) -> Option<ConditionKind> {
        match self {
            Self::Available | Self::Modifying => Some(ConditionKind::Available),
            Self::Deleting | Self::Stopped | Self::Stopping => Some(ConditionKind::Unavailable),
            Self::Creating => Some(ConditionKind::Creating),
            Self::Upgrading | Self::ConfiguringIamDatabaseAuth | Self::Unmapped(_) => None,
        }
    }

    /// Whether RDS is already applying a change to the cluster
    #[must_use]
    pub fn change_in_flight(&self) -> bool {
        matches!(
            self,
            Self::Modifying | Self::Upgrading | Self::ConfiguringIamDatabaseAuth
        )
    }
}

/// Availability class of the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Creating,
    Available,
    Unavailable,
}

impl ConditionKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKind::Creating => "Creating",
            ConditionKind::Available => "Available",
            ConditionKind::Unavailable => "Unavailable",
        }
    }

    /// `Ready` condition for this availability class
    #[must_use]
    pub fn to_condition(self) -> Condition {
        let status = if self == ConditionKind::Available {
            "True"
        } else {
            "False"
        };
        Condition {
            r#type: CONDITION_TYPE_READY.to_string(),
            status: status.to_string(),
            last_transition_time: Some(chrono::Utc::now().to_rfc3339()),
            reason: Some(self.as_str().to_string()),
            message: None,
        }
    }
}

/// Map a provider status string to a condition
#[must_use]
pub fn map_status(status: &str) -> Option<ConditionKind> {
    ProviderStatus::parse(status).condition()
}

/// Set the `Ready` condition from a provider status string
///
/// Returns the condition that was set, or `None` if the status has no mapping.
pub fn apply_status(status: &mut DBClusterStatus, provider_status: &str) -> Option<ConditionKind> {
    let parsed = ProviderStatus::parse(provider_status);
    let Some(kind) = parsed.condition() else {
        debug!(
            provider_status = provider_status,
            "No condition mapping for provider status, leaving conditions unchanged"
        );
        return None;
    };
    status.set_condition(kind.to_condition());
    Some(kind)
}
