pub use crate::error::{EpResult, Error};
pub use crate::types::{ClientContext, Tenant, TnId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
