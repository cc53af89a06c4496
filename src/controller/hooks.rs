//! # Lifecycle Hooks
//!
//! The seam between the generic converge engine and a resource kind.
//!
//! The engine owns the observe/create/update/delete cycle and the provider
//! client. Around each provider call it invokes one hook of a
//! [`LifecycleHooks`] implementation injected at startup: `pre_*` hooks shape
//! the request, `post_*` hooks interpret the response. Hooks never call the
//! provider themselves.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::controller::error::AdapterError;

/// Named credential slots and their values
///
/// Values are plain bytes handed to the converge engine for its connection
/// secret; the password slot is not wiped on drop.
pub type ConnectionDetails = BTreeMap<String, Vec<u8>>;

/// Result of observing the external resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalObservation {
    /// Whether the external resource exists
    pub resource_exists: bool,
    /// Whether the external resource matches the desired spec
    pub resource_up_to_date: bool,
    /// Connection details discovered while observing
    pub connection_details: ConnectionDetails,
}

/// Result of creating the external resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalCreation {
    /// Connection details to persist for consumers of the resource
    pub connection_details: ConnectionDetails,
}

/// One hook per lifecycle phase of a managed resource kind
///
/// Post hooks receive the provider call's outcome; a failed call is returned
/// untouched. The engine guarantees at most one concurrent reconcile per
/// resource identity.
#[async_trait]
pub trait LifecycleHooks: Send + Sync {
    /// Managed resource type
    type Resource: Send + Sync;
    /// Describe request builder
    type DescribeInput: Send;
    /// Describe response
    type DescribeOutput: Send + Sync;
    /// Create request builder
    type CreateInput: Send;
    /// Create response
    type CreateOutput: Send + Sync;
    /// Modify request builder
    type UpdateInput: Send;
    /// Delete request builder
    type DeleteInput: Send;

    /// Shape the describe request
    fn pre_observe(
        &self,
        cr: &Self::Resource,
        input: Self::DescribeInput,
    ) -> Result<Self::DescribeInput, AdapterError>;

    /// Interpret the describe response and update the resource status
    fn post_observe(
        &self,
        cr: &mut Self::Resource,
        response: Result<&Self::DescribeOutput, AdapterError>,
        observation: ExternalObservation,
    ) -> Result<ExternalObservation, AdapterError>;

    /// Whether the described resource already matches the desired spec
    fn is_up_to_date(
        &self,
        cr: &Self::Resource,
        response: &Self::DescribeOutput,
    ) -> Result<bool, AdapterError>;

    /// Shape the create request, provisioning credentials as needed
    async fn pre_create(
        &self,
        cr: &Self::Resource,
        input: Self::CreateInput,
    ) -> Result<Self::CreateInput, AdapterError>;

    /// Interpret the create response into connection details
    async fn post_create(
        &self,
        cr: &Self::Resource,
        response: Result<&Self::CreateOutput, AdapterError>,
        creation: ExternalCreation,
    ) -> Result<ExternalCreation, AdapterError>;

    /// Shape the modify request
    fn pre_update(
        &self,
        cr: &Self::Resource,
        input: Self::UpdateInput,
    ) -> Result<Self::UpdateInput, AdapterError>;

    /// Shape the delete request
    ///
    /// The returned flag tells the engine whether deletion is already
    /// complete; when false, completion is detected by later observes.
    fn pre_delete(
        &self,
        cr: &Self::Resource,
        input: Self::DeleteInput,
    ) -> Result<(Self::DeleteInput, bool), AdapterError>;

    /// Narrow a describe response to the resource's own entry
    fn filter_list(
        &self,
        cr: &Self::Resource,
        response: &Self::DescribeOutput,
    ) -> Self::DescribeOutput;
}
