//! SQLite implementation of the Ecoparam meta adapter.
//!
//! The [`MetaAdapter`] trait only covers reads. Writes are exposed as
//! inherent methods for provisioning tools and tests; callers that keep a
//! parameter cache must invalidate it after writing.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use ecoparam_types::meta_adapter::{LanguageResource, ListRowOptions, MetaAdapter};
use ecoparam_types::prelude::*;
use ecoparam_types::types::{Role, Row, RowPage};

mod language;
mod parameter;
mod role;
mod schema;
mod section;
mod tenant;
mod utils;

/// Data for a new section
#[derive(Clone, Debug)]
pub struct CreateSection {
	pub title: Box<str>,
	pub urlname: Box<str>,
	pub page: Box<str>,
	/// JSON array of role ids, `[]` for every role
	pub roles_access: Box<str>,
	pub status: i64,
}

impl Default for CreateSection {
	fn default() -> Self {
		Self {
			title: "".into(),
			urlname: "".into(),
			page: "".into(),
			roles_access: "[]".into(),
			status: 1,
		}
	}
}

#[derive(Debug)]
pub struct MetaAdapterSqlite {
	db: SqlitePool,
}

impl MetaAdapterSqlite {
	/// Open (or create) the database file at `path`
	pub async fn new(path: impl AsRef<Path>) -> EpResult<Self> {
		let path = path.as_ref();
		if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(dir).await.map_err(|err| {
				error!("Cannot create database directory {}: {}", dir.display(), err);
				Error::ConfigError(format!("cannot create {}", dir.display()))
			})?;
		}

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path)
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		info!("Meta database opened: {}", path.display());
		Ok(Self { db })
	}

	// Provisioning
	//**************
	pub async fn create_tenant(&self, tn_id: TnId, name: &str) -> EpResult<()> {
		tenant::create(&self.db, tn_id, name).await
	}

	/// Insert or update a parameter. `TnId(0)` writes a platform parameter.
	pub async fn put_parameter(
		&self,
		tn_id: TnId,
		name: &str,
		value: &str,
		conditions: &str,
	) -> EpResult<i64> {
		parameter::put(&self.db, tn_id, name, value, conditions).await
	}

	pub async fn delete_parameter(&self, tn_id: TnId, name: &str) -> EpResult<bool> {
		parameter::delete(&self.db, tn_id, name).await
	}

	pub async fn create_section(&self, tn_id: TnId, section: &CreateSection) -> EpResult<i64> {
		section::create(&self.db, tn_id, section).await
	}

	pub async fn create_role(
		&self,
		tn_id: TnId,
		role_id: i64,
		role_name: &str,
		default_page: &str,
	) -> EpResult<()> {
		role::create(&self.db, tn_id, role_id, role_name, default_page).await
	}

	pub async fn put_language_resource(
		&self,
		tn_id: TnId,
		resource: &LanguageResource,
	) -> EpResult<()> {
		language::put(&self.db, tn_id, resource).await
	}
}

#[async_trait]
impl MetaAdapter for MetaAdapterSqlite {
	// Ecosystem registry
	//********************
	async fn tenant_exists(&self, tn_id: TnId) -> EpResult<bool> {
		tenant::exists(&self.db, tn_id).await
	}

	async fn read_tenant_name(&self, tn_id: TnId) -> EpResult<Option<Box<str>>> {
		tenant::read_name(&self.db, tn_id).await
	}

	// Role registry
	//***************
	async fn read_role(&self, tn_id: TnId, role_id: i64) -> EpResult<Option<Role>> {
		role::read(&self.db, tn_id, role_id).await
	}

	// Parameters
	//************
	async fn read_parameter(&self, tn_id: TnId, name: &str) -> EpResult<Option<Row>> {
		parameter::read(&self.db, tn_id, name).await
	}

	async fn list_parameters(&self, tn_id: TnId) -> EpResult<Vec<Row>> {
		parameter::list(&self.db, tn_id).await
	}

	// Sections
	//**********
	async fn list_sections(&self, tn_id: TnId, opts: &ListRowOptions) -> EpResult<RowPage> {
		section::list(&self.db, tn_id, opts).await
	}

	// Languages
	//***********
	async fn list_language_resources(&self, tn_id: TnId) -> EpResult<Vec<LanguageResource>> {
		language::list(&self.db, tn_id).await
	}
}

// vim: ts=4
