//! Roles

use sqlx::{Row as _, SqlitePool};

use crate::utils::*;
use ecoparam_types::prelude::*;
use ecoparam_types::types::Role;

pub(crate) async fn read(db: &SqlitePool, tn_id: TnId, role_id: i64) -> EpResult<Option<Role>> {
	let res = sqlx::query("SELECT id, default_page FROM roles WHERE tn_id = ? AND id = ?")
		.bind(tn_id.0)
		.bind(role_id)
		.fetch_optional(db)
		.await;
	map_opt(res, |row| {
		let default_page: Option<String> = row.try_get("default_page")?;
		Ok(Role {
			id: row.try_get("id")?,
			tn_id,
			default_page: default_page.unwrap_or_default().into(),
		})
	})
}

pub(crate) async fn create(
	db: &SqlitePool,
	tn_id: TnId,
	role_id: i64,
	role_name: &str,
	default_page: &str,
) -> EpResult<()> {
	let res = sqlx::query(
		"INSERT INTO roles (id, tn_id, role_name, default_page) VALUES (?, ?, ?, ?)",
	)
	.bind(role_id)
	.bind(tn_id.0)
	.bind(role_name)
	.bind(default_page)
	.execute(db)
	.await;
	map_db(res)?;
	Ok(())
}

// vim: ts=4
