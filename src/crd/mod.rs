//! # Custom Resource Definitions
//!
//! CRD types for the DBCluster controller.
//!
//! ## Module Structure
//!
//! - `spec.rs` - Main CRD specification and desired parameters
//! - `references.rs` - Secret references
//! - `status.rs` - Observed provider state and conditions

mod references;
mod spec;
mod status;

// Re-export all public types
pub use references::{SecretKeySelector, SecretReference};
pub use spec::{DBCluster, DBClusterParameters, DBClusterSpec};
pub use status::{Condition, DBClusterObservation, DBClusterStatus};
