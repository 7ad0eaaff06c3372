//! Common types used throughout Ecoparam.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// TnId //
//******//
/// Ecosystem (tenant) identifier. `TnId(0)` is the platform namespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TnId(pub i64);

impl TnId {
	pub const PLATFORM: TnId = TnId(0);

	pub fn is_platform(self) -> bool {
		self.0 == 0
	}
}

impl std::fmt::Display for TnId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for TnId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for TnId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(TnId(i64::deserialize(deserializer)?))
	}
}

// Tenant //
//********//
/// A resolved ecosystem handle.
///
/// Only produced by tenant resolution. The prefix is the canonical decimal
/// form of the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tenant {
	tn_id: TnId,
	prefix: Box<str>,
}

impl Tenant {
	/// Build the handle for an already validated id
	pub fn resolved(tn_id: TnId) -> Self {
		Self { tn_id, prefix: tn_id.0.to_string().into() }
	}

	pub fn platform() -> Self {
		Self::resolved(TnId::PLATFORM)
	}

	pub fn tn_id(&self) -> TnId {
		self.tn_id
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}
}

// ClientContext //
//***************//
/// Caller identity, resolved upstream from the authentication token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientContext {
	#[serde(rename = "ecosystem")]
	pub tn_id: TnId,
	#[serde(rename = "role")]
	pub role_id: i64,
	#[serde(rename = "keyId")]
	pub key_id: i64,
}

// Records //
//*********//
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
	pub id: i64,
	pub tn_id: TnId,
	pub name: Box<str>,
	pub value: Box<str>,
	/// Access-control expression, evaluated only by the write path
	pub conditions: Box<str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformParameter {
	pub name: Box<str>,
	pub value: Box<str>,
	pub conditions: Box<str>,
}

impl From<Parameter> for PlatformParameter {
	fn from(param: Parameter) -> Self {
		Self { name: param.name, value: param.value, conditions: param.conditions }
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Role {
	pub id: i64,
	pub tn_id: TnId,
	pub default_page: Box<str>,
}

/// A generic storage row: column name to textual value. NULL is "".
pub type Row = BTreeMap<Box<str>, Box<str>>;

/// One page of rows plus the total number of rows matching the same filter
#[derive(Clone, Debug, Default)]
pub struct RowPage {
	pub count: i64,
	pub rows: Vec<Row>,
}


// vim: ts=4
