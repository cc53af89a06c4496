//! # DBCluster Status
//!
//! Observed provider state and the conditions derived from it.

use serde::{Deserialize, Serialize};

/// Status of the DBCluster resource
#[derive(Debug, Clone, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DBClusterStatus {
    /// Last-known provider-side representation of the cluster
    #[serde(default)]
    pub at_provider: Option<DBClusterObservation>,
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Provider-reported state of the cluster
#[derive(Debug, Clone, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DBClusterObservation {
    /// Lifecycle status string as reported by RDS (e.g. "available", "creating")
    #[serde(default)]
    pub status: Option<String>,
    /// Writer endpoint of the cluster
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Whether IAM database authentication is enabled
    #[serde(default, rename = "iamDatabaseAuthenticationEnabled")]
    pub iam_database_authentication_enabled: Option<bool>,
    /// Identifier RDS knows the cluster by
    #[serde(default)]
    pub db_cluster_identifier: Option<String>,
}

/// Condition represents a condition of a resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition
    pub r#type: String,
    /// Status of the condition (True, False, Unknown)
    pub status: String,
    /// Last transition time
    #[serde(default)]
    pub last_transition_time: Option<String>,
    /// Reason for the condition
    #[serde(default)]
    pub reason: Option<String>,
    /// Message describing the condition
    #[serde(default)]
    pub message: Option<String>,
}

impl DBClusterStatus {
    /// Set a condition, replacing any existing condition of the same type
    ///
    /// The transition time of the existing condition is kept when neither
    /// status nor reason changed, so re-observing the same state is a no-op.
    pub fn set_condition(&mut self, mut condition: Condition) {
        match self
            .conditions
            .iter_mut()
            .find(|c| c.r#type == condition.r#type)
        {
            Some(existing) => {
                if existing.status == condition.status && existing.reason == condition.reason {
                    condition.last_transition_time = existing.last_transition_time.clone();
                }
                *existing = condition;
            }
            None => self.conditions.push(condition),
        }
    }

    /// Find a condition by type
    #[must_use]
    pub fn condition(&self, condition_type: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.r#type == condition_type)
    }
}
