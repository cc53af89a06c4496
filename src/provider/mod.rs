//! # Provider Shapes
//!
//! Request and response shapes of the provider API the converge engine calls.
//! The adapter shapes requests and reads responses; it never sends them.

pub mod rds;
