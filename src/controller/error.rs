//! # Adapter Errors
//!
//! Error taxonomy returned by the lifecycle hooks to the converge engine.
//! The engine owns logging, backoff and requeueing; hooks never retry.

use thiserror::Error;

/// Boxed error from an external collaborator
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub const ERR_GET_PASSWORD: &str = "cannot get password from the given secret";
pub const ERR_GENERATE_PASSWORD: &str = "unable to generate a password";
pub const ERR_GET_SECRET_FAILED: &str = "failed to get Kubernetes secret";
pub const ERR_UPDATE_SECRET_FAILED: &str = "failed to update Kubernetes secret";
pub const ERR_SAVE_SECRET_FAILED: &str = "failed to save generated password to Kubernetes secret";
pub const ERR_NO_PASSWORD_SECRET_REF: &str =
    "no masterUserPasswordSecretRef given, unable to save password";

#[derive(Debug, Error)]
pub enum AdapterError {
    /// A required reference is missing from the spec
    #[error("{0}")]
    Configuration(&'static str),

    /// Password generation or secret read failed
    #[error("{context}: {source}")]
    Credential {
        context: &'static str,
        #[source]
        source: BoxError,
    },

    /// Secret write failed
    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        #[source]
        source: BoxError,
    },

    /// Failure reported by the provider API, passed through unchanged
    #[error(transparent)]
    Provider(BoxError),
}

impl AdapterError {
    pub(crate) fn credential(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Credential {
            context,
            source: source.into(),
        }
    }

    pub(crate) fn persistence(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Persistence {
            context,
            source: source.into(),
        }
    }

    /// Wrap a provider-side failure
    pub fn provider(source: impl Into<BoxError>) -> Self {
        Self::Provider(source.into())
    }

    /// Stable context string identifying the failed step, if any
    #[must_use]
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::Configuration(msg) => Some(msg),
            Self::Credential { context, .. } | Self::Persistence { context, .. } => Some(context),
            Self::Provider(_) => None,
        }
    }
}
