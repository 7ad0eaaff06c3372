//! Comma-separated name allow-lists

use std::collections::HashSet;

/// Set of accepted names. An empty filter accepts everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameFilter {
	names: HashSet<Box<str>>,
}

impl NameFilter {
	/// Split on `,` and drop empty tokens. Tokens are taken verbatim, so
	/// `"a, b"` yields `"a"` and `" b"`.
	pub fn parse(raw: &str) -> Self {
		Self { names: raw.split(',').filter(|s| !s.is_empty()).map(Box::from).collect() }
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn accepts(&self, name: &str) -> bool {
		self.names.is_empty() || self.names.contains(name)
	}

	/// Keep the items whose name is accepted, preserving order
	pub fn apply<T, F>(&self, items: Vec<T>, name_of: F) -> Vec<T>
	where
		F: Fn(&T) -> &str,
	{
		if self.names.is_empty() {
			return items;
		}
		items.into_iter().filter(|item| self.names.contains(name_of(item))).collect()
	}
}

impl From<Option<&str>> for NameFilter {
	fn from(raw: Option<&str>) -> Self {
		raw.map(NameFilter::parse).unwrap_or_default()
	}
}


// vim: ts=4
