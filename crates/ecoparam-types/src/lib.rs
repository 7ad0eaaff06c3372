//! Shared types, adapter traits, and core utilities for Ecoparam.
//!
//! The storage adapters and the core services both depend on this crate,
//! so adapter crates compile without pulling in the services.

pub mod error;
pub mod meta_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
