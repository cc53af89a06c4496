//! # Constants
//!
//! Shared constants used throughout the controller.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Annotation carrying the provider-facing name of a managed resource
pub const EXTERNAL_NAME_ANNOTATION: &str = "crossplane.io/external-name";

/// Connection detail key for the cluster endpoint
pub const CONNECTION_ENDPOINT_KEY: &str = "endpoint";

/// Connection detail key for the master username
pub const CONNECTION_USERNAME_KEY: &str = "username";

/// Connection detail key for the master password
pub const CONNECTION_PASSWORD_KEY: &str = "password";

/// Condition type driven by the provider lifecycle status
pub const CONDITION_TYPE_READY: &str = "Ready";

/// Default length of generated master passwords
pub const DEFAULT_PASSWORD_LENGTH: usize = 27;

/// Shortest master password the generator will produce
pub const MIN_PASSWORD_LENGTH: usize = 16;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "dbcluster_controller=info";
