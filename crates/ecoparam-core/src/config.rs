//! Core configuration

use std::env;
use std::str::FromStr;

use crate::paginate::{MAX_LIMIT, PageConfig};
use crate::prelude::*;

/// Row limit used by the sections listing when the request gives none
pub const SECTIONS_DEFAULT_LIMIT: i64 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
	/// Upper bound for any requested page size
	pub max_limit: i64,
	pub sections_default_limit: i64,
	/// Capacity of the parameter read-through cache. 0 disables caching.
	pub parameter_cache_size: usize,
}

impl Default for CoreConfig {
	fn default() -> Self {
		Self {
			max_limit: MAX_LIMIT,
			sections_default_limit: SECTIONS_DEFAULT_LIMIT,
			parameter_cache_size: 0,
		}
	}
}

impl CoreConfig {
	/// Read overrides from `EP_MAX_LIMIT`, `EP_SECTIONS_LIMIT` and
	/// `EP_PARAM_CACHE_SIZE`.
	pub fn from_env() -> EpResult<Self> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Same as [`CoreConfig::from_env`] with a custom variable source
	pub fn from_lookup<F>(lookup: F) -> EpResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();
		if let Some(v) = parse_var(&lookup, "EP_MAX_LIMIT")? {
			config.max_limit = v;
		}
		if let Some(v) = parse_var(&lookup, "EP_SECTIONS_LIMIT")? {
			config.sections_default_limit = v;
		}
		if let Some(v) = parse_var(&lookup, "EP_PARAM_CACHE_SIZE")? {
			config.parameter_cache_size = v;
		}
		debug!("Core config: {:?}", config);
		Ok(config)
	}

	pub fn sections_page_config(&self) -> PageConfig {
		PageConfig { default_limit: self.sections_default_limit, max_limit: self.max_limit }
	}
}

fn parse_var<T, F>(lookup: &F, key: &str) -> EpResult<Option<T>>
where
	T: FromStr,
	F: Fn(&str) -> Option<String>,
{
	match lookup(key) {
		None => Ok(None),
		Some(raw) if raw.trim().is_empty() => Ok(None),
		Some(raw) => raw
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| Error::ConfigError(format!("{} has invalid value '{}'", key, raw))),
	}
}


// vim: ts=4
