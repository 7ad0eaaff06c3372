//! Ecoparam core: ecosystem-scoped parameter resolution and role-filtered
//! section listing.
//!
//! Services consume decoded request objects plus a [`ClientContext`] and
//! return view objects or a typed [`Error`]. Transport lives elsewhere.
//!
//! [`ClientContext`]: ecoparam_types::types::ClientContext
//! [`Error`]: ecoparam_types::error::Error

pub mod app;
pub mod cache;
pub mod config;
pub mod localize;
pub mod name_filter;
pub mod paginate;
pub mod parameter;
pub mod prelude;
pub mod section;
pub mod tenant;

pub use app::{Core, CoreBuilder};

// vim: ts=4
