//! Adapter that stores ecosystems, their parameters, sections, roles and
//! language resources.
//!
//! The core only reads through this trait. Writes belong to the adapter
//! implementations and their owners.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::{Role, Row, RowPage};

/// Options for paged listings. Values are already normalized by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListRowOptions {
	pub limit: i64,
	pub offset: i64,
}

/// One language resource: macro name plus its translations keyed by language
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageResource {
	pub name: Box<str>,
	pub translations: BTreeMap<Box<str>, Box<str>>,
}

#[async_trait]
pub trait MetaAdapter: Debug + Send + Sync {
	// Ecosystem registry
	//********************
	async fn tenant_exists(&self, tn_id: TnId) -> EpResult<bool>;

	/// Returns `None` if the ecosystem does not exist
	async fn read_tenant_name(&self, tn_id: TnId) -> EpResult<Option<Box<str>>>;

	// Role registry
	//***************
	async fn read_role(&self, tn_id: TnId, role_id: i64) -> EpResult<Option<Role>>;

	// Parameters
	//************
	/// Exact-name lookup. `TnId(0)` addresses the platform namespace.
	async fn read_parameter(&self, tn_id: TnId, name: &str) -> EpResult<Option<Row>>;

	/// All parameter rows of a namespace in storage order
	async fn list_parameters(&self, tn_id: TnId) -> EpResult<Vec<Row>>;

	// Sections
	//**********
	/// Active sections (`status > 0`) ordered by id, plus the total count of
	/// active sections regardless of paging.
	async fn list_sections(&self, tn_id: TnId, opts: &ListRowOptions) -> EpResult<RowPage>;

	// Languages
	//***********
	async fn list_language_resources(&self, tn_id: TnId) -> EpResult<Vec<LanguageResource>>;
}

// vim: ts=4
