//! Parameter storage, including the platform namespace (`tn_id = 0`)

use sqlx::{Row as _, SqlitePool};

use crate::utils::*;
use ecoparam_types::prelude::*;
use ecoparam_types::types::Row;

const COLUMNS: &str = "SELECT id, name, value, conditions FROM parameters";

pub(crate) async fn read(db: &SqlitePool, tn_id: TnId, name: &str) -> EpResult<Option<Row>> {
	let res = sqlx::query(&format!("{} WHERE tn_id = ? AND name = ?", COLUMNS))
		.bind(tn_id.0)
		.bind(name)
		.fetch_optional(db)
		.await;
	map_opt(res, |row| text_row(&row))
}

pub(crate) async fn list(db: &SqlitePool, tn_id: TnId) -> EpResult<Vec<Row>> {
	let rows = sqlx::query(&format!("{} WHERE tn_id = ? ORDER BY id", COLUMNS))
		.bind(tn_id.0)
		.fetch_all(db)
		.await;
	collect_res(map_db(rows)?.iter().map(text_row))
}

/// Insert or replace a parameter, returning its id
pub(crate) async fn put(
	db: &SqlitePool,
	tn_id: TnId,
	name: &str,
	value: &str,
	conditions: &str,
) -> EpResult<i64> {
	let res = sqlx::query(
		"INSERT INTO parameters (tn_id, name, value, conditions) VALUES (?, ?, ?, ?)
		ON CONFLICT(tn_id, name) DO UPDATE SET value = excluded.value, conditions = excluded.conditions
		RETURNING id",
	)
	.bind(tn_id.0)
	.bind(name)
	.bind(value)
	.bind(conditions)
	.fetch_one(db)
	.await;
	map_db(res.and_then(|row| row.try_get("id")))
}

pub(crate) async fn delete(db: &SqlitePool, tn_id: TnId, name: &str) -> EpResult<bool> {
	let res = sqlx::query("DELETE FROM parameters WHERE tn_id = ? AND name = ?")
		.bind(tn_id.0)
		.bind(name)
		.execute(db)
		.await;
	Ok(map_db(res)?.rows_affected() > 0)
}

// vim: ts=4
