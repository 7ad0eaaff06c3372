//! Ecosystem registry

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use ecoparam_types::prelude::*;

pub(crate) async fn exists(db: &SqlitePool, tn_id: TnId) -> EpResult<bool> {
	let res = sqlx::query("SELECT 1 FROM tenants WHERE tn_id = ?")
		.bind(tn_id.0)
		.fetch_optional(db)
		.await;
	Ok(map_db(res)?.is_some())
}

pub(crate) async fn read_name(db: &SqlitePool, tn_id: TnId) -> EpResult<Option<Box<str>>> {
	let res = sqlx::query("SELECT name FROM tenants WHERE tn_id = ?")
		.bind(tn_id.0)
		.fetch_optional(db)
		.await;
	map_opt(res, |row| row.try_get::<String, _>("name").map(Into::into))
}

pub(crate) async fn create(db: &SqlitePool, tn_id: TnId, name: &str) -> EpResult<()> {
	if tn_id.0 <= 0 {
		return Err(Error::ValidationError(format!("invalid ecosystem id: {}", tn_id)));
	}
	let res = sqlx::query("INSERT INTO tenants (tn_id, name) VALUES (?, ?)")
		.bind(tn_id.0)
		.bind(name)
		.execute(db)
		.await;
	map_db(res)?;
	info!("Created ecosystem {} ({})", tn_id, name);
	Ok(())
}

// vim: ts=4
