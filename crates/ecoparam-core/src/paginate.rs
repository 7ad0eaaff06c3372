//! Offset/limit normalization

use crate::prelude::*;

pub const DEFAULT_LIMIT: i64 = 25;
pub const MAX_LIMIT: i64 = 1000;

/// Limits for one call site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
	/// Used when the request has no positive limit. 0 means `DEFAULT_LIMIT`.
	pub default_limit: i64,
	/// Upper bound for any limit. 0 means `MAX_LIMIT`.
	pub max_limit: i64,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self { default_limit: DEFAULT_LIMIT, max_limit: MAX_LIMIT }
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
	pub limit: i64,
	pub offset: i64,
}

/// Normalize a requested limit/offset pair.
///
/// Non-positive limits fall back to the default, every limit is capped.
/// Negative offsets are rejected.
pub fn normalize(limit: i64, offset: i64, config: PageConfig) -> EpResult<Page> {
	if offset < 0 {
		return Err(Error::ValidationError(format!("offset must not be negative: {}", offset)));
	}

	let default_limit = if config.default_limit > 0 { config.default_limit } else { DEFAULT_LIMIT };
	let max_limit = if config.max_limit > 0 { config.max_limit } else { MAX_LIMIT };

	let limit = if limit > 0 { limit } else { default_limit };
	Ok(Page { limit: limit.min(max_limit), offset })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cfg(default_limit: i64, max_limit: i64) -> PageConfig {
		PageConfig { default_limit, max_limit }
	}

	#[test]
	fn test_default_limit() {
		let page = normalize(0, 5, cfg(25, 1000)).unwrap();
		assert_eq!(page, Page { limit: 25, offset: 5 });

		let page = normalize(-3, 0, cfg(100, 1000)).unwrap();
		assert_eq!(page.limit, 100);
	}

	#[test]
	fn test_unset_default_uses_global() {
		let page = normalize(0, 0, cfg(0, 0)).unwrap();
		assert_eq!(page.limit, DEFAULT_LIMIT);
	}

	#[test]
	fn test_limit_is_capped() {
		let page = normalize(5000, 0, cfg(25, 1000)).unwrap();
		assert_eq!(page, Page { limit: 1000, offset: 0 });

		let page = normalize(5000, 0, cfg(25, 0)).unwrap();
		assert_eq!(page.limit, MAX_LIMIT);

		// A default above the cap is capped as well
		let page = normalize(0, 0, cfg(50, 10)).unwrap();
		assert_eq!(page.limit, 10);
	}

	#[test]
	fn test_requested_limit_within_bounds() {
		let page = normalize(40, 80, PageConfig::default()).unwrap();
		assert_eq!(page, Page { limit: 40, offset: 80 });
	}

	#[test]
	fn test_negative_offset_rejected() {
		let res = normalize(10, -1, PageConfig::default());
		assert!(matches!(res, Err(Error::ValidationError(_))));
	}
}

// vim: ts=4
