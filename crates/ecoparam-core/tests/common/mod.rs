//! Shared test infrastructure: an in-memory meta adapter and fixtures.

#![allow(dead_code)]

pub mod fixtures;
pub mod memory;

pub use fixtures::*;
pub use memory::*;

// vim: ts=4
