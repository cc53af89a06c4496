//! # Configuration
//!
//! Environment-driven configuration for the adapter.

mod adapter;

pub use adapter::{AdapterConfig, LogFormat};
