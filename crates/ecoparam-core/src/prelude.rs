pub use ecoparam_types::prelude::*;

// vim: ts=4
